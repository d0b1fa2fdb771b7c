//! User repository over `usuarios.csv`.

use serde::{Deserialize, Serialize};

use chatclothes_core::{CredentialHash, Phone, UserAccount};

use super::RepositoryError;
use super::table::CsvTable;

/// One row of the users table.
///
/// `id` and `numero` both hold the phone number. `recomendacao` is carried
/// through untouched for files written by older tools.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: String,
    pub numero: String,
    pub instagram: String,
    pub nome: String,
    pub tamanho: String,
    pub genero: String,
    pub recomendacao: String,
    pub senha: String,
}

impl TryFrom<UserRecord> for UserAccount {
    type Error = RepositoryError;

    fn try_from(r: UserRecord) -> Result<Self, Self::Error> {
        let identity = Phone::parse(&r.id)
            .map_err(|e| RepositoryError::DataCorruption(format!("user {:?}: {e}", r.id)))?;

        Ok(Self {
            identity,
            name: r.nome,
            handle: r.instagram,
            preferred_size: r.tamanho,
            gender: r.genero,
            credential_hash: CredentialHash::new(r.senha),
        })
    }
}

impl From<&UserAccount> for UserRecord {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.identity.as_str().to_owned(),
            numero: account.identity.as_str().to_owned(),
            instagram: account.handle.clone(),
            nome: account.name.clone(),
            tamanho: account.preferred_size.clone(),
            genero: account.gender.clone(),
            recomendacao: String::new(),
            senha: account.credential_hash.as_str().to_owned(),
        }
    }
}

/// Repository for user account operations.
pub struct UserRepository<'a> {
    table: &'a CsvTable<UserRecord>,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(table: &'a CsvTable<UserRecord>) -> Self {
        Self { table }
    }

    /// Get an account by phone number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read.
    pub fn get(&self, identity: &Phone) -> Result<Option<UserAccount>, RepositoryError> {
        self.table
            .load()?
            .into_iter()
            .find(|r| r.id.trim() == identity.as_str())
            .map(UserAccount::try_from)
            .transpose()
    }

    /// Store a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone number is already
    /// registered, or another `RepositoryError` if the table cannot be read
    /// or written.
    pub fn create(&self, account: &UserAccount) -> Result<(), RepositoryError> {
        self.table.modify(|records| {
            if records.iter().any(|r| r.id.trim() == account.identity.as_str()) {
                return Err(RepositoryError::Conflict(format!(
                    "user {} already exists",
                    account.identity
                )));
            }
            records.push(UserRecord::from(account));
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn account(phone: &str) -> UserAccount {
        UserAccount {
            identity: Phone::parse(phone).unwrap(),
            name: "Ana".to_owned(),
            handle: "@ana".to_owned(),
            preferred_size: "M".to_owned(),
            gender: "Feminino".to_owned(),
            credential_hash: CredentialHash::new("ab12".to_owned()),
        }
    }

    #[test]
    fn test_create_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let ana = account("11987654321");

        store.users().create(&ana).unwrap();
        let found = store.users().get(&ana.identity).unwrap().unwrap();

        assert_eq!(found, ana);
        assert_eq!(found.credential_hash.as_str(), "ab12");
    }

    #[test]
    fn test_duplicate_is_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        store.users().create(&account("11987654321")).unwrap();
        let err = store.users().create(&account("11987654321")).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn test_unknown_phone() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let phone = Phone::parse("11900000000").unwrap();
        assert!(store.users().get(&phone).unwrap().is_none());
    }

    #[test]
    fn test_reads_file_without_recommendation_column() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::USERS_FILE),
            "id,numero,instagram,nome,tamanho,genero,senha\n11987654321,11987654321,@bia,Bia,P,F,ff00\n",
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let phone = Phone::parse("11987654321").unwrap();
        let bia = store.users().get(&phone).unwrap().unwrap();
        assert_eq!(bia.name, "Bia");
        assert_eq!(bia.credential_hash.as_str(), "ff00");
    }
}
