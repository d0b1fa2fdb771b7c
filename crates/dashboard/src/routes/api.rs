//! Catalog JSON API.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use chatclothes_core::{Filter, Product, ProductId, Sale};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::{CatalogService, CatalogSummary, SearchOutcome};
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search response body.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Found { filter: Filter, items: Vec<Product> },
    NoResults { filter: Filter, items: Vec<Product> },
}

/// Sell response body.
#[derive(Debug, Serialize)]
pub struct SellResponse {
    pub message: &'static str,
    pub item: Product,
}

/// Every product record, in stock or not.
#[instrument(skip(state))]
pub async fn list_clothing(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state
        .run_blocking(|store| Ok(CatalogService::new(store).all()?))
        .await?;
    Ok(Json(products))
}

/// Free-text search over products in stock.
#[instrument(skip(state))]
pub async fn search_clothing(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let outcome = state
        .run_blocking(move |store| Ok(CatalogService::new(store).search(&params.q)?))
        .await?;

    match outcome {
        SearchOutcome::Found { filter, products } => Ok(Json(SearchResponse::Found {
            filter,
            items: products,
        })),
        SearchOutcome::NoResults { filter } => Ok(Json(SearchResponse::NoResults {
            filter,
            items: Vec::new(),
        })),
        SearchOutcome::InvalidQuery => Err(AppError::InvalidQuery),
    }
}

/// Sell one unit of a product.
#[instrument(skip(state))]
pub async fn sell(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<SellResponse>> {
    add_breadcrumb("sale", "Sell requested", &[("product_id", id.to_string())]);

    let item = state
        .run_blocking(move |store| Ok(CatalogService::new(store).sell(id)?))
        .await?;

    Ok(Json(SellResponse {
        message: "Sale registered successfully",
        item,
    }))
}

/// Inventory totals.
#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<Json<CatalogSummary>> {
    let summary = state
        .run_blocking(|store| Ok(CatalogService::new(store).summary()?))
        .await?;
    Ok(Json(summary))
}

/// The sale log, oldest first.
#[instrument(skip(state))]
pub async fn sales(State(state): State<AppState>) -> Result<Json<Vec<Sale>>> {
    let sales = state
        .run_blocking(|store| Ok(CatalogService::new(store).sales_history()?))
        .await?;
    Ok(Json(sales))
}
