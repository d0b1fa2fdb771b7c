//! Sale log over `vendas.csv`.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chatclothes_core::{Price, ProductId, Sale};

use super::RepositoryError;
use super::table::{CsvTable, parse_cell};

/// One row of the sales table, cells as stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleRecord {
    pub produto_id: String,
    pub preco: String,
    /// RFC 3339 timestamp.
    pub data: String,
}

impl TryFrom<SaleRecord> for Sale {
    type Error = RepositoryError;

    fn try_from(r: SaleRecord) -> Result<Self, Self::Error> {
        let corrupt = |detail: String| {
            RepositoryError::DataCorruption(format!(
                "sale of product {:?}: {detail}",
                r.produto_id.trim()
            ))
        };

        let product_id: i32 = parse_cell(&r.produto_id, "produto_id").map_err(corrupt)?;
        let amount: Decimal = parse_cell(&r.preco, "preco").map_err(corrupt)?;
        let price = Price::new(amount).map_err(|e| corrupt(e.to_string()))?;
        let data = r.data.trim();
        if data.is_empty() {
            return Err(corrupt("missing date".to_owned()));
        }
        let sold_at: DateTime<Utc> = data
            .parse()
            .map_err(|e| corrupt(format!("data {data:?}: {e}")))?;

        Ok(Self {
            product_id: ProductId::new(product_id),
            price,
            sold_at,
        })
    }
}

impl From<&Sale> for SaleRecord {
    fn from(s: &Sale) -> Self {
        Self {
            produto_id: s.product_id.to_string(),
            preco: s.price.amount().to_string(),
            data: s.sold_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Repository for the append-only sale log.
pub struct SaleRepository<'a> {
    table: &'a CsvTable<SaleRecord>,
}

impl<'a> SaleRepository<'a> {
    /// Create a new sale repository.
    #[must_use]
    pub const fn new(table: &'a CsvTable<SaleRecord>) -> Self {
        Self { table }
    }

    /// Append one sale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read or written.
    pub fn append(&self, sale: &Sale) -> Result<(), RepositoryError> {
        self.table.modify(|records| {
            records.push(SaleRecord::from(sale));
            Ok(())
        })
    }

    /// All sales, oldest first. Unreadable rows are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read.
    pub fn list(&self) -> Result<Vec<Sale>, RepositoryError> {
        let sales = self
            .table
            .load()?
            .into_iter()
            .filter_map(|record| match Sale::try_from(record) {
                Ok(sale) => Some(sale),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable sale row");
                    None
                }
            })
            .collect();
        Ok(sales)
    }
}
