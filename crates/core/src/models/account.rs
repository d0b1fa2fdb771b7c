//! Customer accounts.

use serde::Serialize;

use crate::types::{CredentialHash, Phone};

/// A registered customer.
///
/// The phone number is the account identity. The credential hash is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    /// Phone number, unique per account.
    pub identity: Phone,
    /// Display name.
    pub name: String,
    /// Instagram handle.
    pub handle: String,
    /// Size the customer usually wears, as they typed it.
    pub preferred_size: String,
    /// Self-described gender.
    pub gender: String,
    /// Digest of the password.
    #[serde(skip)]
    pub credential_hash: CredentialHash,
}
