//! Flat-file record store.
//!
//! # Data directory
//!
//! Each table is one CSV file with a header row:
//!
//! ## Tables
//!
//! - `loja.csv` - Products (`id,tipo,cor,tamanho,preco,imagem,estoque,vendas`)
//! - `usuarios.csv` - Customer accounts (`id,numero,instagram,nome,tamanho,genero,recomendacao,senha`)
//! - `gostos.csv` - Taste signals (`usuario_id,caracteristicas,compras,carrinho`)
//! - `vendas.csv` - Sale log (`produto_id,preco,data`)
//!
//! Every write loads the whole table, changes it in memory and replaces the
//! file. A per-table mutex serializes those cycles within the process.

pub mod preferences;
pub mod products;
pub mod sales;
pub mod table;
pub mod users;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub use preferences::{PreferenceRecord, PreferenceRepository, PreferenceUpdate};
pub use products::{ProductRecord, ProductRepository};
pub use sales::{SaleRecord, SaleRepository};
pub use table::CsvTable;
pub use users::{UserRecord, UserRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing a table file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file is not valid CSV for its record type.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Data in a table is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate phone number).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Handle on the data directory and its tables.
///
/// Cheap to clone; clones share the same table locks.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    data_dir: PathBuf,
    products: CsvTable<ProductRecord>,
    users: CsvTable<UserRecord>,
    preferences: CsvTable<PreferenceRecord>,
    sales: CsvTable<SaleRecord>,
}

impl Store {
    /// Products table file name.
    pub const PRODUCTS_FILE: &'static str = "loja.csv";
    /// Users table file name.
    pub const USERS_FILE: &'static str = "usuarios.csv";
    /// Preferences table file name.
    pub const PREFERENCES_FILE: &'static str = "gostos.csv";
    /// Sales table file name.
    pub const SALES_FILE: &'static str = "vendas.csv";

    /// Open the store rooted at `data_dir`, creating the directory if needed.
    ///
    /// Table files are created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        tracing::debug!(data_dir = %data_dir.display(), "Opened record store");

        Ok(Self {
            inner: Arc::new(StoreInner {
                products: CsvTable::new(data_dir.join(Self::PRODUCTS_FILE)),
                users: CsvTable::new(data_dir.join(Self::USERS_FILE)),
                preferences: CsvTable::new(data_dir.join(Self::PREFERENCES_FILE)),
                sales: CsvTable::new(data_dir.join(Self::SALES_FILE)),
                data_dir,
            }),
        })
    }

    /// The directory holding the table files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Repository over the products table.
    #[must_use]
    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.inner.products)
    }

    /// Repository over the users table.
    #[must_use]
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.inner.users)
    }

    /// Repository over the preferences table.
    #[must_use]
    pub fn preferences(&self) -> PreferenceRepository<'_> {
        PreferenceRepository::new(&self.inner.preferences)
    }

    /// Repository over the sales log.
    #[must_use]
    pub fn sales(&self) -> SaleRepository<'_> {
        SaleRepository::new(&self.inner.sales)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("data_dir", &self.inner.data_dir)
            .finish_non_exhaustive()
    }
}
