//! Store-level error model.

use std::path::PathBuf;

use kelontong_core::DomainError;
use thiserror::Error;

/// Fixed, user-facing messages recorded in the store's `error`/`success_message`.
pub mod messages {
    pub const PRODUCTS_API_FAILED: &str = "Failed to fetch products from API";
    pub const LOCAL_FILE_FAILED: &str = "Failed to fetch products from local file";
    pub const CREATE_FAILED: &str = "Failed to create product";
    pub const FETCH_PRODUCT_FAILED: &str = "Failed to fetch product";
    pub const LOAD_FAILED: &str = "Failed to load products";
    pub const GENERIC_FAILURE: &str = "An error occurred";
    pub const CREATE_SUCCEEDED: &str = "Product has been created successfully!";
}

/// Failure of a store action.
///
/// The `Display` output of every variant is what the store records in its
/// `error` field.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A source answered without data: a non-2xx status, or a missing
    /// fallback file (`status` is `None`).
    #[error("{message}")]
    Rejected {
        status: Option<u16>,
        message: &'static str,
    },

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The fallback file exists but could not be read.
    #[error("failed to read {}: {reason}", path.display())]
    LocalFile { path: PathBuf, reason: String },

    /// Validation or schema failure from the catalog domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    pub(crate) fn rejected(status: u16, message: &'static str) -> Self {
        Self::Rejected {
            status: Some(status),
            message,
        }
    }

    /// HTTP status of a rejected request, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Message to record for a failure, or `fallback` if it renders empty.
pub(crate) fn failure_message(err: &StoreError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
