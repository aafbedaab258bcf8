//! Storefront catalog entry point.

use anyhow::Context;

use storefront_client::config::{self, ClientConfig};
use storefront_client::{CatalogClient, Storefront, render};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    // API URL from STOREFRONT_API_URL or the public default
    let config = ClientConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(api_url = %config.api_url(), "starting storefront");

    let client = CatalogClient::new(config);
    let mut storefront = Storefront::mount(&client).await;

    for action in config::view_actions_from_env() {
        storefront.dispatch(action);
    }

    print!("{}", render(&storefront.view()));
    Ok(())
}
