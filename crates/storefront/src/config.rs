//! Store configuration (environment-driven).

use std::path::PathBuf;

use kelontong_products::CategoryCatalog;
use reqwest::Url;
use thiserror::Error;

use crate::fallback::FallbackSource;

pub const API_URL_KEY: &str = "KELONTONG_API_URL";
pub const API_TOKEN_KEY: &str = "KELONTONG_API_TOKEN";
pub const FALLBACK_KEY: &str = "KELONTONG_FALLBACK";
pub const FALLBACK_ON_EMPTY_KEY: &str = "KELONTONG_FALLBACK_ON_EMPTY";
pub const CATEGORIES_KEY: &str = "KELONTONG_CATEGORIES";

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_FALLBACK_PATH: &str = "data/products.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Everything a [`ProductStore`](crate::ProductStore) needs to know about its
/// data sources.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the product API; endpoints live under `{base}/products`.
    pub api_base_url: Url,
    /// Optional bearer token sent with every API request.
    pub api_token: Option<String>,
    /// Static product file used when the API fails.
    pub fallback: FallbackSource,
    /// Also use the fallback when the API answers with an empty list.
    pub fallback_on_empty: bool,
    /// The fixed category set products are validated against.
    pub categories: CategoryCatalog,
}

impl StoreConfig {
    /// Defaults for everything except the API location.
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            api_token: None,
            fallback: FallbackSource::File(PathBuf::from(DEFAULT_FALLBACK_PATH)),
            fallback_on_empty: true,
            categories: CategoryCatalog::standard(),
        }
    }

    /// Load from `KELONTONG_*` environment variables, defaulting the unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, a map in tests, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(parse_api_url(&api_url)?);

        if let Some(token) = lookup(API_TOKEN_KEY).filter(|t| !t.trim().is_empty()) {
            config.api_token = Some(token);
        }

        if let Some(fallback) = lookup(FALLBACK_KEY) {
            config.fallback = FallbackSource::parse(&fallback)?;
        }

        if let Some(flag) = lookup(FALLBACK_ON_EMPTY_KEY) {
            config.fallback_on_empty = parse_flag(FALLBACK_ON_EMPTY_KEY, &flag)?;
        }

        if let Some(definition) = lookup(CATEGORIES_KEY) {
            config.categories = CategoryCatalog::parse(&definition)
                .map_err(|e| ConfigError::invalid(CATEGORIES_KEY, e.to_string()))?;
        }

        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackSource) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_fallback_on_empty(mut self, enabled: bool) -> Self {
        self.fallback_on_empty = enabled;
        self
    }

    pub fn with_categories(mut self, categories: CategoryCatalog) -> Self {
        self.categories = categories;
        self
    }
}

/// Parse an API base URL; only `http`/`https` are accepted.
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::invalid(API_URL_KEY, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid(
            API_URL_KEY,
            format!("unsupported scheme {other:?}"),
        )),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("expected a boolean, got {other:?}"))),
    }
}
