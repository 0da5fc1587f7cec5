//! The product store: owned state plus the actions that mutate it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use chrono::{DateTime, Utc};
use kelontong_core::Entity;
use kelontong_products::{CategoryCatalog, Product, ProductCreateInput};

use crate::api::ApiClient;
use crate::config::StoreConfig;
use crate::error::{StoreError, failure_message, messages};
use crate::fallback::FallbackSource;
use crate::state::{DataOrigin, ProductState};

/// Single source of truth for product data and the status of the last action.
///
/// Cheap to clone; clones share the same state. The lock is only held for
/// short synchronous sections and never across an `.await`, so overlapping
/// actions interleave at their I/O points and the last writer wins.
#[derive(Debug, Clone)]
pub struct ProductStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: RwLock<ProductState>,
    http: reqwest::Client,
    api: ApiClient,
    fallback: FallbackSource,
    fallback_on_empty: bool,
    categories: CategoryCatalog,
}

/// Clears `loading` when an action ends, however it ends.
struct LoadingGuard<'a> {
    store: &'a ProductStore,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.update(|state| state.loading = false);
    }
}

impl ProductStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Build the store around an existing HTTP client.
    pub fn with_client(config: StoreConfig, http: reqwest::Client) -> Self {
        let api = match config.api_token {
            Some(token) => ApiClient::with_token(http.clone(), config.api_base_url, token),
            None => ApiClient::new(http.clone(), config.api_base_url),
        };

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(ProductState::default()),
                http,
                api,
                fallback: config.fallback,
                fallback_on_empty: config.fallback_on_empty,
                categories: config.categories,
            }),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn is_success(&self) -> bool {
        self.read().is_success
    }

    pub fn success_message(&self) -> Option<String> {
        self.read().success_message.clone()
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.read().selected_product.clone()
    }

    pub fn origin(&self) -> Option<DataOrigin> {
        self.read().origin
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.read().last_fetched_at
    }

    /// Copy of the whole state.
    pub fn snapshot(&self) -> ProductState {
        self.read().clone()
    }

    /// First product in the list with identifier `id`.
    pub fn product_by_id(&self, id: &str) -> Option<Product> {
        self.read().product_by_id(id).cloned()
    }

    pub fn categories(&self) -> &CategoryCatalog {
        &self.inner.categories
    }

    /// Replace the product list from the API, falling back to the static file.
    ///
    /// Never fails: a double failure is recorded in `error` and `products` is
    /// left untouched.
    pub async fn fetch_products(&self) {
        let _loading = self.begin(|state| state.error = None);

        let remote = match self.inner.api.list_products().await {
            Ok(products) if products.is_empty() && self.inner.fallback_on_empty => {
                tracing::warn!("API returned no products; trying local fallback");
                None
            }
            Ok(products) => Some(products),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch products from API; trying local fallback");
                None
            }
        };

        if let Some(products) = remote {
            self.replace_products(products, DataOrigin::Remote);
            return;
        }

        match self.inner.fallback.load(&self.inner.http).await {
            Ok(products) => self.replace_products(products, DataOrigin::LocalFallback),
            Err(err) => {
                tracing::error!(error = %err, fallback = %self.inner.fallback, "error fetching products");
                let message = failure_message(&err, messages::LOAD_FAILED);
                self.update(|state| state.error = Some(message));
            }
        }
    }

    /// Create a product through the API and append it to the list.
    ///
    /// Failures are recorded in `error` and returned.
    pub async fn create_product(&self, input: ProductCreateInput) -> Result<Product, StoreError> {
        let _loading = self.begin(|state| {
            state.error = None;
            state.is_success = false;
            state.success_message = None;
        });

        let created = match self.try_create(&input).await {
            Ok(product) => product,
            Err(err) => return Err(self.record_failure(err, "error creating product")),
        };

        self.update(|state| {
            state.products.push(created.clone());
            state.is_success = true;
            state.success_message = Some(messages::CREATE_SUCCEEDED.to_string());
        });
        tracing::info!(product_id = %created.id(), sku = %created.sku(), "product created");

        Ok(created)
    }

    pub fn set_selected_product(&self, product: Option<Product>) {
        self.update(|state| state.selected_product = product);
    }

    /// Select a product, preferring the loaded list over a network call.
    ///
    /// Failures are recorded in `error` and returned.
    pub async fn fetch_product(&self, id: &str) -> Result<Product, StoreError> {
        let _loading = self.begin(|state| {
            state.error = None;
            state.selected_product = None;
        });

        if let Some(product) = self.product_by_id(id) {
            tracing::debug!(product_id = id, "product served from loaded list");
            self.set_selected_product(Some(product.clone()));
            return Ok(product);
        }

        match self.inner.api.get_product(id).await {
            Ok(product) => {
                self.warn_uncategorized(std::slice::from_ref(&product));
                self.set_selected_product(Some(product.clone()));
                Ok(product)
            }
            Err(err) => Err(self.record_failure(err, "error fetching product")),
        }
    }

    /// Dismiss the error/success status.
    pub fn clear_status(&self) {
        self.update(|state| {
            state.error = None;
            state.is_success = false;
            state.success_message = None;
        });
    }

    async fn try_create(&self, input: &ProductCreateInput) -> Result<Product, StoreError> {
        input.validate(&self.inner.categories)?;
        self.inner.api.create_product(input).await
    }

    fn begin(&self, reset: impl FnOnce(&mut ProductState)) -> LoadingGuard<'_> {
        self.update(|state| {
            state.loading = true;
            reset(state);
        });
        LoadingGuard { store: self }
    }

    fn replace_products(&self, products: Vec<Product>, origin: DataOrigin) {
        tracing::info!(count = products.len(), ?origin, "products loaded");
        self.warn_uncategorized(&products);
        self.update(|state| {
            state.products = products;
            state.origin = Some(origin);
            state.last_fetched_at = Some(Utc::now());
        });
    }

    /// Incoming products are kept as served; unknown categories are only logged.
    fn warn_uncategorized(&self, products: &[Product]) -> usize {
        let unknown = self.inner.categories.uncategorized(products);
        for product in &unknown {
            tracing::warn!(
                product_id = %product.id(),
                category_id = product.category_id(),
                "product has a category outside the configured catalog"
            );
        }
        unknown.len()
    }

    fn record_failure(&self, err: StoreError, context: &str) -> StoreError {
        tracing::error!(error = %err, "{context}");
        let message = failure_message(&err, messages::GENERIC_FAILURE);
        self.update(|state| state.error = Some(message));
        err
    }

    fn read(&self) -> RwLockReadGuard<'_, ProductState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ProductState) -> R) -> R {
        let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use kelontong_products::{Dimensions, ProductId};

    use super::*;
    use crate::config::parse_api_url;

    fn offline_store() -> ProductStore {
        // Discard port; nothing here reaches the network.
        ProductStore::new(StoreConfig::new(parse_api_url("http://127.0.0.1:9").unwrap()))
    }

    fn product(id: &str, name: &str) -> Product {
        Product::from_input(
            ProductId::new(id),
            ProductCreateInput {
                category_id: 2,
                category_name: "Household".to_string(),
                sku: format!("HH-{id}"),
                name: name.to_string(),
                description: String::new(),
                dimensions: Dimensions::default(),
                image: String::new(),
                price: 1000.0,
            },
        )
    }

    #[test]
    fn initial_state_is_empty() {
        let store = offline_store();
        assert_eq!(store.snapshot(), ProductState::default());
        assert!(!store.loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.origin(), None);
    }

    #[test]
    fn set_selected_product_sets_and_clears() {
        let store = offline_store();
        let p = product("1", "Rinso");

        store.set_selected_product(Some(p.clone()));
        assert_eq!(store.selected_product(), Some(p));

        store.set_selected_product(None);
        assert_eq!(store.selected_product(), None);
    }

    #[test]
    fn product_by_id_returns_first_match_or_none() {
        let store = offline_store();
        store.replace_products(
            vec![product("1", "Rinso"), product("2", "Sunlight"), product("2", "Duplicate")],
            DataOrigin::Remote,
        );

        assert_eq!(store.product_by_id("x"), None);
        assert_eq!(store.product_by_id("1").map(|p| p.name().to_string()), Some("Rinso".to_string()));
        assert_eq!(store.product_by_id("2").map(|p| p.name().to_string()), Some("Sunlight".to_string()));
    }

    #[test]
    fn replace_products_records_origin_and_time() {
        let store = offline_store();
        store.replace_products(vec![product("1", "Rinso")], DataOrigin::LocalFallback);

        assert_eq!(store.origin(), Some(DataOrigin::LocalFallback));
        assert!(store.origin().unwrap().is_fallback());
        assert!(store.last_fetched_at().is_some());
    }

    #[test]
    fn products_with_unknown_categories_are_kept() {
        let store = offline_store();
        let mut stray = ProductCreateInput {
            category_id: 9,
            category_name: "Frozen".to_string(),
            sku: "FRZ-1".to_string(),
            name: "Ice".to_string(),
            description: String::new(),
            dimensions: Dimensions::default(),
            image: String::new(),
            price: 1.0,
        };
        let products = vec![
            product("1", "Rinso"),
            Product::from_input(ProductId::new("9"), stray.clone()),
        ];
        assert_eq!(store.warn_uncategorized(&products), 1);

        store.replace_products(products, DataOrigin::Remote);
        assert_eq!(store.products().len(), 2);
        assert!(store.product_by_id("9").is_some());

        stray.category_id = 2;
        stray.category_name = "Household".to_string();
        let known = Product::from_input(ProductId::new("10"), stray);
        assert_eq!(store.warn_uncategorized(&[known]), 0);
    }

    #[test]
    fn loading_guard_resets_on_drop() {
        let store = offline_store();
        {
            let _guard = store.begin(|state| state.error = Some("stale".into()));
            assert!(store.loading());
            assert_eq!(store.error().as_deref(), Some("stale"));
        }
        assert!(!store.loading());
    }

    #[test]
    fn clear_status_resets_flags() {
        let store = offline_store();
        store.update(|state| {
            state.error = Some("boom".into());
            state.is_success = true;
            state.success_message = Some(messages::CREATE_SUCCEEDED.into());
        });

        store.clear_status();
        assert_eq!(store.error(), None);
        assert!(!store.is_success());
        assert_eq!(store.success_message(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = offline_store();
        let view = store.clone();
        store.set_selected_product(Some(product("3", "Molto")));
        assert_eq!(view.selected_product().map(|p| p.id().clone()), Some(ProductId::new("3")));
    }

    #[tokio::test]
    async fn invalid_input_is_recorded_and_returned() {
        let store = offline_store();
        let mut input = ProductCreateInput {
            category_id: 7,
            category_name: "Frozen".to_string(),
            sku: "FRZ-1".to_string(),
            name: "Ice".to_string(),
            description: String::new(),
            dimensions: Dimensions::default(),
            image: String::new(),
            price: 1.0,
        };

        let err = store.create_product(input.clone()).await.unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
        assert_eq!(store.error(), Some(err.to_string()));
        assert!(!store.is_success());
        assert!(!store.loading());
        assert!(store.products().is_empty());

        input.name = String::new();
        assert!(store.create_product(input).await.is_err());
    }
}
