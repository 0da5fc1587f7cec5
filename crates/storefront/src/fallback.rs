//! Static product file consulted when the API cannot serve the list.

use std::io::ErrorKind;
use std::path::PathBuf;

use kelontong_products::{Product, parse_local_records};
use reqwest::Url;

use crate::config::{ConfigError, FALLBACK_KEY};
use crate::error::{StoreError, messages};

/// Where the fallback product file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackSource {
    /// A file on local disk.
    File(PathBuf),
    /// A static file served over HTTP (e.g. `/data/products.json` on the web host).
    Url(Url),
}

impl FallbackSource {
    /// `http://`/`https://` values are URLs; anything else is a path.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::invalid(FALLBACK_KEY, "empty location"));
        }

        if value.starts_with("http://") || value.starts_with("https://") {
            Url::parse(value)
                .map(Self::Url)
                .map_err(|e| ConfigError::invalid(FALLBACK_KEY, e.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(value)))
        }
    }

    /// Read and decode the fallback records, mapping numeric ids to strings.
    pub async fn load(&self, http: &reqwest::Client) -> Result<Vec<Product>, StoreError> {
        let bytes = match self {
            Self::File(path) => match tokio::fs::read(path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(StoreError::Rejected {
                        status: None,
                        message: messages::LOCAL_FILE_FAILED,
                    });
                }
                Err(err) => {
                    return Err(StoreError::LocalFile {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                }
            },
            Self::Url(url) => {
                let resp = http.get(url.clone()).send().await?;
                if !resp.status().is_success() {
                    return Err(StoreError::rejected(
                        resp.status().as_u16(),
                        messages::LOCAL_FILE_FAILED,
                    ));
                }
                resp.bytes().await?.to_vec()
            }
        };

        let products = parse_local_records(&bytes)?;
        tracing::debug!(source = %self, count = products.len(), "loaded fallback products");
        Ok(products)
    }
}

impl core::fmt::Display for FallbackSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
