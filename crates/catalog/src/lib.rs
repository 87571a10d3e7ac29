//! Catalog domain module.
//!
//! The catalog is the external, read-only source of purchasable products.
//! The cart core only consumes product identity/price/name/image from here
//! and never mutates anything.

pub mod http;
pub mod product;
pub mod sample;
pub mod source;

pub use http::HttpCatalog;
pub use product::Product;
pub use sample::{SampleCatalog, sample_products};
pub use source::{CatalogError, CatalogSource};
