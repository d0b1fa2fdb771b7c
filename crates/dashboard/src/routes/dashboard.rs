//! Inventory overview page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use chatclothes_core::Product;

use crate::error::Result;
use crate::services::{CatalogService, CatalogSummary};
use crate::state::AppState;

/// Display-ready product row.
#[derive(Clone)]
pub struct ProductRow {
    pub id: String,
    pub garment: String,
    pub color: String,
    pub size: String,
    pub price: String,
    pub image: String,
    pub stock: u32,
    pub sales: u32,
    pub available: bool,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            garment: p.garment.clone(),
            color: p.color.clone(),
            size: p.size.to_string(),
            price: p.price.to_string(),
            image: p.image.clone(),
            stock: p.stock,
            sales: p.sales,
            available: p.is_available(),
        }
    }
}

/// Overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub summary: CatalogSummary,
    pub products: Vec<ProductRow>,
}

/// Display the totals and the full product table.
#[instrument(skip(state))]
pub async fn overview(State(state): State<AppState>) -> Result<DashboardTemplate> {
    let (summary, products) = state
        .run_blocking(|store| {
            let catalog = CatalogService::new(store);
            Ok((catalog.summary()?, catalog.all()?))
        })
        .await?;

    Ok(DashboardTemplate {
        summary,
        products: products.iter().map(ProductRow::from).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use chatclothes_core::Size;

    use crate::routes::test_support::{app_with, body_text, send};

    #[tokio::test]
    async fn test_overview_lists_products_and_totals() {
        let (_dir, state) = app_with(&[
            ("Vestido Floral", "azul", Size::M, "89.90", 2, 3),
            ("saia", "rosa", Size::P, "49.90", 0, 1),
        ]);

        let response = send(&state, "GET", "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Vestido Floral"));
        assert!(html.contains("R$ 89.90"));
        assert!(html.contains("Esgotado"));
    }
}
