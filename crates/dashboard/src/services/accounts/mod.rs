//! Customer account service.
//!
//! Customers are identified by phone number. Passwords are stored as an
//! unsalted SHA-256 hex digest so that existing `usuarios.csv` files keep
//! working.

mod error;

pub use error::AccountError;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use tracing::instrument;

use chatclothes_core::{CredentialHash, Phone, UserAccount};

use crate::db::{RepositoryError, Store, UserRepository};

/// Profile fields collected at sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub identity: Phone,
    pub name: String,
    pub handle: String,
    pub preferred_size: String,
    pub gender: String,
}

/// Account service.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            users: store.users(),
        }
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::AlreadyExists` if the phone number is taken.
    #[instrument(skip_all, fields(identity = %registration.identity))]
    pub fn register(
        &self,
        registration: Registration,
        credential: &SecretString,
    ) -> Result<UserAccount, AccountError> {
        let account = UserAccount {
            identity: registration.identity,
            name: registration.name,
            handle: registration.handle,
            preferred_size: registration.preferred_size,
            gender: registration.gender,
            credential_hash: hash_credential(credential),
        };

        self.users.create(&account).map_err(|e| match e {
            RepositoryError::Conflict(_) => AccountError::AlreadyExists,
            other => AccountError::Repository(other),
        })?;

        tracing::info!("Account registered");
        Ok(account)
    }

    /// Check a phone number and password.
    ///
    /// Returns `None` for an unknown number and for a wrong password alike.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Repository` if the users table cannot be read.
    #[instrument(skip(self, credential), fields(identity = %identity))]
    pub fn authenticate(
        &self,
        identity: &Phone,
        credential: &SecretString,
    ) -> Result<Option<UserAccount>, AccountError> {
        let Some(account) = self.users.get(identity)? else {
            return Ok(None);
        };

        if account.credential_hash == hash_credential(credential) {
            Ok(Some(account))
        } else {
            tracing::debug!("Credential mismatch");
            Ok(None)
        }
    }
}

/// Lowercase hex SHA-256 of the password.
fn hash_credential(credential: &SecretString) -> CredentialHash {
    let digest = Sha256::digest(credential.expose_secret().as_bytes());
    CredentialHash::new(hex::encode(digest))
}
