//! Products domain module (catalog).
//!
//! This crate contains the catalog's data model and its validation rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The wire names used by the storefront API are fixed here.

pub mod category;
pub mod local;
pub mod product;

pub use category::{CATEGORY_COUNT, CategoryCatalog, ProductCategory};
pub use local::{LocalProductRecord, parse_local_records};
pub use product::{Dimensions, Product, ProductCreateInput, ProductId};
