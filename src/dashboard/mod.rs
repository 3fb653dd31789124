use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::board::schema::{outcomes_from_rows, predictions_from_rows};
use crate::board::{
    band_reference, build_opportunities, list_games, summarize, DashboardView, SheetPayload,
};
use crate::sheets::{SnapshotCache, SourceError};

mod page;

#[derive(Clone)]
pub struct AppState {
    pub cache: SnapshotCache,
    /// Threshold used when a request does not pass `min_edge`
    pub default_min_edge: f64,
}

/// View parameters chosen in the browser.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub min_edge: Option<f64>,
    #[serde(default)]
    pub refresh: bool,
}

/// Error body returned by every API route.
#[derive(Debug)]
pub enum ApiError {
    Source(SourceError),
    BadRequest(String),
}

impl From<SourceError> for ApiError {
    fn from(e: SourceError) -> Self {
        ApiError::Source(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Source(e) => {
                warn!("Sheet refresh failed: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/data", get(data_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/opportunities", get(opportunities_handler))
        .route("/api/performance", get(performance_handler))
        .route("/api/games", get(games_handler))
        .route("/api/bands", get(bands_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

impl AppState {
    fn min_edge(&self, query: &ViewQuery) -> Result<f64, ApiError> {
        let min_edge = query.min_edge.unwrap_or(self.default_min_edge);
        if !min_edge.is_finite() || min_edge < 0.0 {
            return Err(ApiError::BadRequest(format!(
                "min_edge must be a non-negative number, got {}",
                min_edge
            )));
        }
        Ok(min_edge)
    }

    async fn payload(&self, query: &ViewQuery) -> Result<Arc<SheetPayload>, ApiError> {
        Ok(self.cache.get(query.refresh).await?)
    }
}

/// Serve the dashboard page, injecting the default threshold.
async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let html = page::DASHBOARD_HTML.replace(
        r#"<body>"#,
        &format!(r#"<body data-min-edge="{}">"#, state.default_min_edge),
    );
    Html(html)
}

/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "source": state.cache.source_name(),
    }))
}

/// GET /api/data?refresh=false
async fn data_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let payload = state.payload(&query).await?;
    Ok(Json(SheetPayload::clone(&payload)))
}

/// GET /api/dashboard?min_edge=2.0&refresh=false
async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let min_edge = state.min_edge(&query)?;
    let payload = state.payload(&query).await?;
    Ok(Json(DashboardView::build(&payload, min_edge)))
}

/// GET /api/opportunities?min_edge=2.0
async fn opportunities_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let min_edge = state.min_edge(&query)?;
    let payload = state.payload(&query).await?;
    let predictions = predictions_from_rows(&payload.predictions);
    Ok(Json(build_opportunities(&predictions, min_edge)))
}

/// GET /api/performance?min_edge=2.0
async fn performance_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let min_edge = state.min_edge(&query)?;
    let payload = state.payload(&query).await?;
    let predictions = predictions_from_rows(&payload.predictions);
    let opportunity_count = build_opportunities(&predictions, min_edge).len();
    let outcomes = outcomes_from_rows(&payload.cover_analysis);
    Ok(Json(summarize(&outcomes, opportunity_count)))
}

/// GET /api/games
async fn games_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let payload = state.payload(&query).await?;
    Ok(Json(list_games(&predictions_from_rows(&payload.predictions))))
}

/// GET /api/bands
async fn bands_handler() -> impl IntoResponse {
    Json(band_reference())
}
