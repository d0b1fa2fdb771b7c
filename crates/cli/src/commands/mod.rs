//! Subcommand implementations.

pub mod chat;
pub mod product;
pub mod shop;

use chatclothes_dashboard::db::RepositoryError;
use chatclothes_dashboard::services::AccountError;
use thiserror::Error;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal input or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory could not be read or written.
    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Account lookup or registration failed.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}
