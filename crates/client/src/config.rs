//! Client configuration, read from the environment.

use storefront_catalog::CatalogAction;
use thiserror::Error;

pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Initial view state, one variable per control.
pub const CATEGORY_ENV: &str = "STOREFRONT_CATEGORY";
pub const SORT_ENV: &str = "STOREFRONT_SORT";
pub const MIN_PRICE_ENV: &str = "STOREFRONT_MIN_PRICE";
pub const MAX_PRICE_ENV: &str = "STOREFRONT_MAX_PRICE";
pub const SEARCH_ENV: &str = "STOREFRONT_SEARCH";
pub const MIN_RATING_ENV: &str = "STOREFRONT_MIN_RATING";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOREFRONT_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(raw));
        }
        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; falls back to [`DEFAULT_API_URL`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.api_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Actions that reproduce the view state described by the environment.
pub fn view_actions_from_env() -> Vec<CatalogAction> {
    view_actions_from_lookup(|key| std::env::var(key).ok())
}

pub fn view_actions_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Vec<CatalogAction> {
    let mut actions = Vec::new();
    if let Some(category) = lookup(CATEGORY_ENV) {
        actions.push(CatalogAction::SelectCategory(category));
    }
    if let Some(sort) = lookup(SORT_ENV) {
        actions.push(CatalogAction::ChangeSort(sort));
    }
    if let Some(min) = lookup(MIN_PRICE_ENV) {
        actions.push(CatalogAction::SetMinPrice(min));
    }
    if let Some(max) = lookup(MAX_PRICE_ENV) {
        actions.push(CatalogAction::SetMaxPrice(max));
    }
    if let Some(term) = lookup(SEARCH_ENV) {
        actions.push(CatalogAction::Search(term));
    }
    if let Some(stars) = lookup(MIN_RATING_ENV) {
        actions.push(CatalogAction::SetRatingFloor(stars));
    }
    actions
}
