//! Staff catalog commands.
//!
//! # Usage
//!
//! ```bash
//! # Add a product
//! cc-cli product add --type vestido --color azul --size M --price 89.90 \
//!     --image https://img.example/vestido.png --stock 5
//!
//! # List every product, including sold-out ones
//! cc-cli product list
//! ```

use std::io::Write;

use chatclothes_core::NewProduct;
use chatclothes_dashboard::db::Store;
use chatclothes_dashboard::services::CatalogService;

use super::CliError;
use crate::render;

/// Add a product and report its ID.
pub fn add<W: Write>(store: &Store, new: NewProduct, out: &mut W) -> Result<(), CliError> {
    let product = CatalogService::new(store).add(new)?;
    writeln!(
        out,
        "✅ Produto '{} {} {}' adicionado com sucesso! (ID {})",
        product.garment, product.color, product.size, product.id
    )?;
    Ok(())
}

/// Print every product.
pub fn list<W: Write>(store: &Store, out: &mut W) -> Result<(), CliError> {
    let products = CatalogService::new(store).all()?;
    if products.is_empty() {
        writeln!(out, "Nenhum produto cadastrado.")?;
    }
    for product in &products {
        write!(out, "{}", render::product_block(product))?;
    }
    Ok(())
}
