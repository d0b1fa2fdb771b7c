//! Chat-style text for catalog results.

use std::fmt::Write;

use chatclothes_core::Product;
use chatclothes_dashboard::services::catalog::INVALID_QUERY_MESSAGE;
use chatclothes_dashboard::services::{Listing, SearchOutcome};

pub const NONE_AVAILABLE: &str = "😞 Nenhum produto disponível no momento.";
pub const NO_RESULTS: &str = "🔍 Nenhum produto encontrado com os filtros aplicados.";

/// One product as a multi-line block, preceded by a blank line.
pub fn product_block(p: &Product) -> String {
    format!(
        "\n🛍 ID: {} - {} - {}, Tamanho {}\n💲 Preço: {}\n📸 Imagem: {}\n📦 Estoque: {}\n",
        p.id, p.garment, p.color, p.size, p.price, p.image, p.stock
    )
}

fn with_heading(heading: &str, products: &[Product]) -> String {
    products.iter().fold(format!("{heading}\n"), |mut out, p| {
        let _ = write!(out, "{}", product_block(p));
        out
    })
}

pub fn listing(listing: &Listing) -> String {
    match listing {
        Listing::Available(products) => with_heading("👕 Produtos disponíveis:", products),
        Listing::NoneAvailable => NONE_AVAILABLE.to_owned(),
    }
}

pub fn search(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found { filter, products } => format!(
            "Filtros aplicados: {filter}\n{}",
            with_heading("🔍 Resultados encontrados:", products)
        ),
        SearchOutcome::NoResults { filter } => format!("Filtros aplicados: {filter}\n{NO_RESULTS}"),
        SearchOutcome::InvalidQuery => INVALID_QUERY_MESSAGE.to_owned(),
    }
}
