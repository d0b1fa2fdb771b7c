//! Sales insights.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::services::{CatalogService, TopSeller};
use crate::state::AppState;

/// Number of top sellers returned when no limit is given.
pub const DEFAULT_TOP_SELLERS: usize = 5;

/// Top seller query parameters.
#[derive(Debug, Deserialize)]
pub struct TopSellerParams {
    pub limit: Option<usize>,
}

/// Best-selling products with revenue, most units sold first.
#[instrument(skip(state))]
pub async fn top_sellers(
    State(state): State<AppState>,
    Query(params): Query<TopSellerParams>,
) -> Result<Json<Vec<TopSeller>>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_SELLERS);
    let top = state
        .run_blocking(move |store| Ok(CatalogService::new(store).top_sellers(limit)?))
        .await?;
    Ok(Json(top))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use chatclothes_core::Size;

    use crate::routes::test_support::{app_with, body_json, send};

    #[tokio::test]
    async fn test_top_sellers_with_revenue() {
        let (_dir, state) = app_with(&[
            ("vestido", "azul", Size::M, "10", 2, 1),
            ("saia", "rosa", Size::P, "20", 3, 5),
            ("blusa", "verde", Size::G, "30", 3, 0),
        ]);

        let body = body_json(send(&state, "GET", "/api/insights/top-sellers").await).await;
        let top = body.as_array().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["tipo"], "saia");
        assert_eq!(top[0]["revenue"], json!(100.0));
        assert_eq!(top[1]["tipo"], "vestido");
    }

    #[tokio::test]
    async fn test_limit() {
        let (_dir, state) = app_with(&[
            ("vestido", "azul", Size::M, "10", 2, 1),
            ("saia", "rosa", Size::P, "20", 3, 5),
        ]);

        let response = send(&state, "GET", "/api/insights/top-sellers?limit=1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        let response = send(&state, "GET", "/api/insights/top-sellers?limit=muitos").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
