//! Catalog error types.

use thiserror::Error;

use chatclothes_core::ProductId;

use crate::db::RepositoryError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product has the given ID.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The product exists but has no units left.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// Repository/storage error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
