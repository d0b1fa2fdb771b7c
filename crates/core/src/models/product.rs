//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, Size};

/// A clothing item in the catalog.
///
/// Field names in the serialized form follow the store's data files
/// (`tipo`, `cor`, `tamanho`, ...), which the dashboard front end reads as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID, starting at 1.
    pub id: ProductId,
    /// Garment type, e.g. "vestido" or "Calça Jeans".
    #[serde(rename = "tipo")]
    pub garment: String,
    /// Color name.
    #[serde(rename = "cor")]
    pub color: String,
    /// Label size.
    #[serde(rename = "tamanho")]
    pub size: Size,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: Price,
    /// Image URL.
    #[serde(rename = "imagem")]
    pub image: String,
    /// Units in stock.
    #[serde(rename = "estoque")]
    pub stock: u32,
    /// Units sold so far.
    #[serde(rename = "vendas")]
    pub sales: u32,
}

impl Product {
    /// A product is available while at least one unit is in stock.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Take one unit out of stock and count it as sold.
    ///
    /// Returns `false` and leaves the product untouched when out of stock.
    pub const fn sell_one(&mut self) -> bool {
        if self.stock == 0 {
            return false;
        }
        self.stock -= 1;
        self.sales += 1;
        true
    }
}

/// Fields supplied when adding a product. The ID is assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "tipo")]
    pub garment: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "tamanho")]
    pub size: Size,
    #[serde(rename = "preco")]
    pub price: Price,
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "estoque")]
    pub stock: u32,
}

impl NewProduct {
    /// Build the product under the given ID with no sales yet.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            garment: self.garment,
            color: self.color,
            size: self.size,
            price: self.price,
            image: self.image,
            stock: self.stock,
            sales: 0,
        }
    }
}
