//! Catalog source boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

/// Catalog fetch failure.
///
/// All variants are recoverable and user-retriable; a retry is just a fresh
/// request (no automatic retry/backoff).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("catalog request failed with status {status}")]
    Http { status: u16 },

    /// Transport-level failure (DNS, connect, timeout, body decode).
    #[error("catalog request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Supplier of the list of purchasable products.
///
/// Implementations own transport and representation; callers only see
/// `Product` values.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
