//! State owned by the product store.

use chrono::{DateTime, Utc};
use kelontong_products::Product;
use serde::Serialize;

/// Which source the current product list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// The product API answered.
    Remote,
    /// The API failed (or was empty) and the static file was used.
    LocalFallback,
}

impl DataOrigin {
    pub fn is_fallback(&self) -> bool {
        *self == DataOrigin::LocalFallback
    }
}

/// Snapshot of the store.
///
/// `Default` is the initial state: no products, nothing loading, no status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductState {
    /// Catalog in fetch/creation order.
    pub products: Vec<Product>,
    /// True while an action is in flight.
    pub loading: bool,
    /// Message of the last failure.
    pub error: Option<String>,
    pub selected_product: Option<Product>,
    /// Set by a successful creation.
    pub is_success: bool,
    pub success_message: Option<String>,
    /// Source of `products`, once a fetch has replaced them.
    pub origin: Option<DataOrigin>,
    /// When `products` was last replaced by a fetch.
    pub last_fetched_at: Option<DateTime<Utc>>,
}

impl ProductState {
    /// First product with the given identifier.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_fallback_is_a_fallback() {
        assert!(DataOrigin::LocalFallback.is_fallback());
        assert!(!DataOrigin::Remote.is_fallback());
    }
}
