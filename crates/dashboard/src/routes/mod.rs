//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Inventory overview page
//! GET  /health                    - Health check
//!
//! # Catalog API (JSON)
//! GET  /api/clothing              - Every product record
//! GET  /api/clothing/search?q=    - Free-text search over products in stock
//! POST /api/sell/{id}             - Sell one unit
//! GET  /api/summary               - Inventory totals
//! GET  /api/sales                 - Sale log
//!
//! # Insights (JSON)
//! GET  /api/insights/top-sellers  - Best sellers with revenue
//! ```

pub mod api;
pub mod dashboard;
pub mod insights;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the catalog API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/clothing", get(api::list_clothing))
        .route("/clothing/search", get(api::search_clothing))
        .route("/sell/{id}", post(api::sell))
        .route("/summary", get(api::summary))
        .route("/sales", get(api::sales))
        .nest("/insights", insight_routes())
}

/// Create the insights routes router.
pub fn insight_routes() -> Router<AppState> {
    Router::new().route("/top-sellers", get(insights::top_sellers))
}

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::overview))
        .nest("/api", api_routes())
}

/// Build the complete application with state and layers applied.
///
/// CORS is permissive because the front end is served from another origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::test_support::{app_with, body_text, send};

    #[tokio::test]
    async fn test_health() {
        let (_dir, state) = app_with(&[]);
        let response = send(&state, "GET", "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (_dir, state) = app_with(&[]);
        let response = send(&state, "GET", "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
