//! Product repository over `loja.csv`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chatclothes_core::{NewProduct, Price, Product, ProductId, Size, SizeError};

use super::RepositoryError;
use super::table::{CsvTable, parse_cell};

/// One row of the products table, exactly as stored.
///
/// Cells stay text until [`Product::try_from`], so one bad value only makes
/// its own row unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub id: String,
    pub tipo: String,
    pub cor: String,
    pub tamanho: String,
    pub preco: String,
    pub imagem: String,
    pub estoque: String,
    pub vendas: String,
}

impl ProductRecord {
    /// The row's ID, if the cell holds one.
    fn product_id(&self) -> Option<ProductId> {
        self.id.trim().parse().ok()
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = RepositoryError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        let corrupt = |detail: String| {
            RepositoryError::DataCorruption(format!("product {:?}: {detail}", r.id.trim()))
        };

        let id: i32 = parse_cell(&r.id, "id").map_err(corrupt)?;
        let size: Size = r.tamanho.parse().map_err(|e: SizeError| corrupt(e.to_string()))?;
        let amount: Decimal = parse_cell(&r.preco, "preco").map_err(corrupt)?;
        let price = Price::new(amount).map_err(|e| corrupt(e.to_string()))?;
        let stock: u32 = parse_cell(&r.estoque, "estoque").map_err(corrupt)?;
        let sales: u32 = parse_cell(&r.vendas, "vendas").map_err(corrupt)?;

        Ok(Self {
            id: ProductId::new(id),
            garment: r.tipo,
            color: r.cor,
            size,
            price,
            image: r.imagem,
            stock,
            sales,
        })
    }
}

impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            tipo: p.garment.clone(),
            cor: p.color.clone(),
            tamanho: p.size.to_string(),
            preco: p.price.amount().to_string(),
            imagem: p.image.clone(),
            estoque: p.stock.to_string(),
            vendas: p.sales.to_string(),
        }
    }
}

/// Repository for product table operations.
pub struct ProductRepository<'a> {
    table: &'a CsvTable<ProductRecord>,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(table: &'a CsvTable<ProductRecord>) -> Self {
        Self { table }
    }

    /// All products in store order.
    ///
    /// Rows that cannot be read as a product (unknown size, negative price)
    /// are logged and skipped; they stay in the file untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read.
    pub fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .table
            .load()?
            .into_iter()
            .filter_map(|record| match Product::try_from(record) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable product row");
                    None
                }
            })
            .collect();
        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read or the matching
    /// row is corrupted.
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.table
            .load()?
            .into_iter()
            .find(|r| r.product_id() == Some(id))
            .map(Product::try_from)
            .transpose()
    }

    /// Append a product with the next free ID (highest ID + 1, or 1).
    ///
    /// Unreadable rows still count towards the highest ID when their `id`
    /// cell holds a number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the highest stored ID is
    /// `i32::MAX`, or another `RepositoryError` if the table cannot be read
    /// or written.
    pub fn insert(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        self.table.modify(|records| {
            let id = match records.iter().filter_map(ProductRecord::product_id).max() {
                None => ProductId::new(1),
                Some(max) => max.next().ok_or_else(|| {
                    RepositoryError::DataCorruption(format!("product id {max} leaves no room for another"))
                })?,
            };

            let product = new.into_product(id);
            records.push(ProductRecord::from(&product));
            Ok(product)
        })
    }

    /// Change one product in place and persist the table.
    ///
    /// Returns `Ok(None)` if no product has `id`. If `f` fails nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a `RepositoryError` if the table cannot
    /// be read or written or the row is corrupted.
    pub fn update<E, F>(&self, id: ProductId, f: F) -> Result<Option<Product>, E>
    where
        F: FnOnce(&mut Product) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        self.table.modify(|records| {
            let Some(record) = records.iter_mut().find(|r| r.product_id() == Some(id)) else {
                return Ok(None);
            };

            let mut product = Product::try_from(record.clone())?;
            f(&mut product)?;
            *record = ProductRecord::from(&product);
            Ok(Some(product))
        })
    }

    /// Replace the whole table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be written.
    pub fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from).collect();
        self.table.save(&records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn new_product(garment: &str, stock: u32) -> NewProduct {
        NewProduct {
            garment: garment.to_owned(),
            color: "preto".to_owned(),
            size: Size::G,
            price: Price::parse("59.90").unwrap(),
            image: "https://img.example/p.png".to_owned(),
            stock,
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let first = store.products().insert(new_product("saia", 2)).unwrap();
        let second = store.products().insert(new_product("blusa", 1)).unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(second.sales, 0);
    }

    #[test]
    fn test_insert_after_gap_uses_max_plus_one() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::PRODUCTS_FILE),
            "id,tipo,cor,tamanho,preco,imagem,estoque,vendas\n7,saia,rosa,P,10,,1,0\n",
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let product = store.products().insert(new_product("blusa", 1)).unwrap();
        assert_eq!(product.id, ProductId::new(8));
    }

    #[test]
    fn test_round_trip_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let products = vec![
            new_product("vestido", 3).into_product(ProductId::new(2)),
            new_product("calça", 0).into_product(ProductId::new(1)),
        ];

        store.products().replace_all(&products).unwrap();
        assert_eq!(store.products().list().unwrap(), products);
    }

    #[test]
    fn test_unknown_size_row_is_skipped_but_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::PRODUCTS_FILE),
            "id,tipo,cor,tamanho,preco,imagem,estoque,vendas\n1,Calça Jeans,Azul,42,129.9,,5,85\n2,saia,rosa,P,10,,1,0\n",
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let products = store.products().list().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].garment, "saia");

        store.products().insert(new_product("blusa", 1)).unwrap();
        let raw = std::fs::read_to_string(dir.path().join(Store::PRODUCTS_FILE)).unwrap();
        assert!(raw.contains("Calça Jeans"));
    }

    #[test]
    fn test_bad_number_row_is_skipped_but_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::PRODUCTS_FILE),
            "id,tipo,cor,tamanho,preco,imagem,estoque,vendas\n\
             1,vestido,azul,M,89.9,,2,3.0\n\
             2,saia,rosa,P,10,,1,0\n\
             3,blusa,verde,G,barato,,many,0\n",
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let products = store.products().list().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].garment, "saia");

        let err = store.products().get(ProductId::new(1)).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(ref msg) if msg.contains("vendas")));

        let added = store.products().insert(new_product("jaqueta", 1)).unwrap();
        assert_eq!(added.id, ProductId::new(4));

        let raw = std::fs::read_to_string(dir.path().join(Store::PRODUCTS_FILE)).unwrap();
        assert!(raw.contains("1,vestido,azul,M,89.9,,2,3.0\n"));
        assert!(raw.contains("3,blusa,verde,G,barato,,many,0\n"));
        assert_eq!(store.products().list().unwrap().len(), 2);
    }

    #[test]
    fn test_insert_after_max_id_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::PRODUCTS_FILE),
            format!("id,tipo,cor,tamanho,preco,imagem,estoque,vendas\n{},saia,rosa,P,10,,1,0\n", i32::MAX),
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let err = store.products().insert(new_product("blusa", 1)).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
        assert_eq!(store.products().list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let result: Result<Option<Product>, RepositoryError> =
            store.products().update(ProductId::new(99), |_| Ok(()));
        assert!(result.unwrap().is_none());
    }
}
