//! `kelontong-storefront`
//!
//! **Responsibility:** the product store behind the storefront UI.
//!
//! This crate provides:
//! - `ProductStore`: the owned state container (products, loading/error/success
//!   flags, selected product) and the actions that mutate it
//! - `ApiClient`: the remote product API (list, fetch one, create)
//! - `FallbackSource`: the static product file consulted when the API fails
//! - `StoreConfig`: environment-driven configuration
//!
//! The store is a **thin shell** around the product API; the API remains the
//! authority and the fallback file is read-only.

pub mod api;
pub mod config;
pub mod error;
pub mod fallback;
pub mod state;
pub mod store;

pub use api::ApiClient;
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use fallback::FallbackSource;
pub use state::{DataOrigin, ProductState};
pub use store::ProductStore;
