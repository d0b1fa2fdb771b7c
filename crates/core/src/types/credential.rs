//! Stored credential digest.

use serde::{Deserialize, Serialize};

/// Hex-encoded digest of a customer's password, as kept in the users table.
///
/// The digest is computed by the account service; this type only keeps the
/// stored value from being confused with other strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an already computed hex digest.
    #[must_use]
    pub const fn new(hex_digest: String) -> Self {
        Self(hex_digest)
    }

    /// Get the hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialHash([REDACTED])")
    }
}

impl From<String> for CredentialHash {
    fn from(hex_digest: String) -> Self {
        Self(hex_digest)
    }
}
