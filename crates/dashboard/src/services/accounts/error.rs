//! Account error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The phone number is already registered.
    #[error("user already exists")]
    AlreadyExists,

    /// Repository/storage error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
