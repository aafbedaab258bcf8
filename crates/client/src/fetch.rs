//! The product fetch against the storefront API.

use storefront_catalog::Product;

use crate::config::ClientConfig;

/// Anything that can produce the canonical product list.
pub trait ProductSource {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}

/// HTTP client for `GET {api_url}/products`.
///
/// One request, awaited once. No retry and no explicit timeout.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl ProductSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.config.products_url();
        tracing::info!(%url, "fetching products");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "product fetch rejected");
            return Err(FetchError::Api(status.as_u16(), body));
        }

        let products: Vec<Product> = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::info!(count = products.len(), "products fetched");
        Ok(products)
    }
}

/// Why the product list could not be loaded. `Display` is the message shown
/// in place of the list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("Request failed with status code {0}")]
    Api(u16, String),
    #[error("failed to read product list: {0}")]
    Parse(String),
}
