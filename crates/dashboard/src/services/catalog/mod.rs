//! Catalog service.
//!
//! Lists, searches and sells products, and derives the inventory figures
//! shown on the dashboard.

mod error;

pub use error::CatalogError;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use chatclothes_core::{Filter, NewProduct, Product, ProductId, Sale, interpret};

use crate::db::{ProductRepository, RepositoryError, SaleRepository, Store};

/// Shown when a search names no garment type, color or size.
pub const INVALID_QUERY_MESSAGE: &str = "Nenhum filtro válido encontrado. Tente novamente!";

/// Result of listing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Products with stock, in store order. Never empty.
    Available(Vec<Product>),
    /// Nothing is in stock.
    NoneAvailable,
}

/// Result of a free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one available product matched.
    Found { filter: Filter, products: Vec<Product> },
    /// The query was understood but nothing in stock matches it.
    NoResults { filter: Filter },
    /// No word in the query names a garment type, color or size.
    InvalidQuery,
}

/// Inventory totals over every product, in stock or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_sales: u64,
    pub total_stock: u64,
    pub product_count: usize,
    /// Mean unit price rounded to cents; zero for an empty catalog.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price: Decimal,
}

/// A product that has sold, with what it brought in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopSeller {
    #[serde(flatten)]
    pub product: Product,
    /// Unit price times units sold.
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
    sales: SaleRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            products: store.products(),
            sales: store.sales(),
        }
    }

    /// Add a product under the next free ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be updated.
    #[instrument(skip(self, new), fields(garment = %new.garment))]
    pub fn add(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let product = self.products.insert(new)?;
        tracing::info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    /// Every product, in stock or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be read.
    pub fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.list()
    }

    /// Products with stock, in store order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be read.
    pub fn list(&self) -> Result<Listing, RepositoryError> {
        let available = self.available()?;
        if available.is_empty() {
            Ok(Listing::NoneAvailable)
        } else {
            Ok(Listing::Available(available))
        }
    }

    /// Interpret `query` and return the available products it matches.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be read.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Result<SearchOutcome, RepositoryError> {
        let Some(filter) = interpret(query) else {
            tracing::debug!("No filter in query");
            return Ok(SearchOutcome::InvalidQuery);
        };

        let products: Vec<Product> = self
            .available()?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        tracing::debug!(%filter, matches = products.len(), "Search complete");

        if products.is_empty() {
            Ok(SearchOutcome::NoResults { filter })
        } else {
            Ok(SearchOutcome::Found { filter, products })
        }
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has `id`.
    pub fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products.get(id)?.ok_or(CatalogError::NotFound(id))
    }

    /// Sell one unit: stock goes down by one, sales up by one, and the sale is
    /// logged at the current price.
    ///
    /// Once stock is written the sale stands. A failed log append is reported
    /// through `tracing` only.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has `id`.
    /// Returns `CatalogError::OutOfStock` if the product has no stock left.
    #[instrument(skip(self))]
    pub fn sell(&self, id: ProductId) -> Result<Product, CatalogError> {
        let product = self
            .products
            .update(id, |product| {
                if product.sell_one() {
                    Ok(())
                } else {
                    Err(CatalogError::OutOfStock(id))
                }
            })?
            .ok_or(CatalogError::NotFound(id))?;

        // The sale stands once stock is written
        if let Err(e) = self.sales.append(&Sale {
            product_id: product.id,
            price: product.price,
            sold_at: Utc::now(),
        }) {
            tracing::error!(product_id = %id, error = %e, "Failed to append to sale log");
        }

        tracing::info!(product_id = %id, stock = product.stock, "Sale registered");
        Ok(product)
    }

    /// The sale log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the sales table cannot be read.
    pub fn sales_history(&self) -> Result<Vec<Sale>, RepositoryError> {
        self.sales.list()
    }

    /// Totals over the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be read.
    pub fn summary(&self) -> Result<CatalogSummary, RepositoryError> {
        Ok(summarize(&self.products.list()?))
    }

    /// The `limit` best-selling products, most units sold first.
    ///
    /// Products that never sold are left out. Ties keep store order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the products table cannot be read.
    pub fn top_sellers(&self, limit: usize) -> Result<Vec<TopSeller>, RepositoryError> {
        let mut sold: Vec<Product> = self
            .products
            .list()?
            .into_iter()
            .filter(|p| p.sales > 0)
            .collect();
        sold.sort_by_key(|p| std::cmp::Reverse(p.sales));
        sold.truncate(limit);

        Ok(sold
            .into_iter()
            .map(|product| TopSeller {
                revenue: product.price.amount() * Decimal::from(product.sales),
                product,
            })
            .collect())
    }

    fn available(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .list()?
            .into_iter()
            .filter(Product::is_available)
            .collect())
    }
}

fn summarize(products: &[Product]) -> CatalogSummary {
    let total_sales = products.iter().map(|p| u64::from(p.sales)).sum();
    let total_stock = products.iter().map(|p| u64::from(p.stock)).sum();
    let average_price = if products.is_empty() {
        Decimal::ZERO
    } else {
        let total: Decimal = products.iter().map(|p| p.price.amount()).sum();
        (total / Decimal::from(products.len())).round_dp(2)
    };

    CatalogSummary {
        total_sales,
        total_stock,
        product_count: products.len(),
        average_price,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chatclothes_core::{Price, Size};

    use super::*;

    fn seed(store: &Store, items: &[(&str, &str, Size, &str, u32, u32)]) {
        let products: Vec<Product> = items
            .iter()
            .zip(1..)
            .map(|(&(garment, color, size, price, stock, sales), id)| Product {
                id: ProductId::new(id),
                garment: garment.to_owned(),
                color: color.to_owned(),
                size,
                price: Price::parse(price).unwrap(),
                image: String::new(),
                stock,
                sales,
            })
            .collect();
        store.products().replace_all(&products).unwrap();
    }

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_list_excludes_out_of_stock() {
        let (_dir, store) = store();
        seed(
            &store,
            &[
                ("vestido", "azul", Size::M, "89.90", 0, 3),
                ("saia", "rosa", Size::P, "49.90", 2, 0),
            ],
        );

        let Listing::Available(products) = CatalogService::new(&store).list().unwrap() else {
            panic!("expected available products");
        };
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].garment, "saia");
    }

    #[test]
    fn test_list_empty_catalog() {
        let (_dir, store) = store();
        assert_eq!(
            CatalogService::new(&store).list().unwrap(),
            Listing::NoneAvailable
        );
    }

    #[test]
    fn test_search_by_color() {
        let (_dir, store) = store();
        seed(
            &store,
            &[
                ("Vestido Longo", "Azul", Size::M, "120", 1, 0),
                ("blusa", "verde", Size::M, "40", 1, 0),
            ],
        );

        let outcome = CatalogService::new(&store).search("azul").unwrap();
        let SearchOutcome::Found { products, .. } = outcome else {
            panic!("expected a match, got {outcome:?}");
        };
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].garment, "Vestido Longo");
    }

    #[test]
    fn test_search_distinguishes_invalid_from_empty() {
        let (_dir, store) = store();
        seed(&store, &[("blusa", "verde", Size::M, "40", 1, 0)]);
        let catalog = CatalogService::new(&store);

        assert_eq!(catalog.search("xyz123").unwrap(), SearchOutcome::InvalidQuery);
        assert!(matches!(
            catalog.search("jaqueta roxa").unwrap(),
            SearchOutcome::NoResults { .. }
        ));
    }

    #[test]
    fn test_search_requires_every_field() {
        let (_dir, store) = store();
        seed(
            &store,
            &[
                ("camiseta", "preto", Size::G, "30", 1, 0),
                ("camiseta", "preto", Size::M, "30", 1, 0),
            ],
        );

        let outcome = CatalogService::new(&store)
            .search("camisetas pretas tamanho m")
            .unwrap();
        let SearchOutcome::Found { filter, products } = outcome else {
            panic!("expected a match");
        };
        assert_eq!(filter.size, Some(Size::M));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(2));
    }

    #[test]
    fn test_sell_until_out_of_stock() {
        let (_dir, store) = store();
        seed(&store, &[("saia", "rosa", Size::P, "49.90", 1, 4)]);
        let catalog = CatalogService::new(&store);

        let sold = catalog.sell(ProductId::new(1)).unwrap();
        assert_eq!(sold.stock, 0);
        assert_eq!(sold.sales, 5);

        let err = catalog.sell(ProductId::new(1)).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfStock(_)));

        let err = catalog.sell(ProductId::new(42)).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));

        let history = catalog.sales_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price.amount(), Decimal::new(4990, 2));
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().stock, 0);
    }

    #[test]
    fn test_sale_stands_when_log_is_unwritable() {
        let (dir, store) = store();
        seed(&store, &[("saia", "rosa", Size::P, "49.90", 2, 0)]);
        std::fs::create_dir(dir.path().join(Store::SALES_FILE)).unwrap();

        let catalog = CatalogService::new(&store);
        let sold = catalog.sell(ProductId::new(1)).unwrap();
        assert_eq!((sold.stock, sold.sales), (1, 1));
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().stock, 1);
        assert!(catalog.sales_history().is_err());
    }

    #[test]
    fn test_summary() {
        let (_dir, store) = store();
        seed(
            &store,
            &[
                ("saia", "rosa", Size::P, "10", 2, 1),
                ("blusa", "azul", Size::M, "20", 0, 3),
                ("vestido", "azul", Size::G, "35.55", 5, 0),
            ],
        );

        let summary = CatalogService::new(&store).summary().unwrap();
        assert_eq!(summary.total_sales, 4);
        assert_eq!(summary.total_stock, 7);
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.average_price, Decimal::new(2185, 2));
    }

    #[test]
    fn test_summary_of_empty_catalog() {
        let summary = summarize(&[]);
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.average_price, Decimal::ZERO);
    }

    #[test]
    fn test_top_sellers() {
        let (_dir, store) = store();
        seed(
            &store,
            &[
                ("saia", "rosa", Size::P, "10", 2, 1),
                ("blusa", "azul", Size::M, "20", 0, 3),
                ("vestido", "azul", Size::G, "50", 5, 0),
                ("brinco", "prata", Size::P, "5", 1, 3),
            ],
        );

        let top = CatalogService::new(&store).top_sellers(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product.garment, "blusa");
        assert_eq!(top[0].revenue, Decimal::from(60));
        assert_eq!(top[1].product.garment, "brinco");
    }
}
