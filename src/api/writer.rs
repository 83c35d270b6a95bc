//! Writer tier endpoint - triggers the fetch-then-store run
//!
//! `POST /api/randomnumbers/fetch?count=5&min=1&max=1000`

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::post,
    Json, Router,
};

use super::error::ApiError;
use super::http::service_router;
use crate::ingest::{FetchRequest, IngestionOrchestrator};
use crate::types::FetchResponse;

pub const PREFIX: &str = "/api/randomnumbers";

/// Shared state of the writer tier
pub struct WriterState {
    pub orchestrator: IngestionOrchestrator,
}

impl WriterState {
    pub fn new(orchestrator: IngestionOrchestrator) -> Self {
        Self { orchestrator }
    }
}

/// Create the writer tier router
pub fn create_router(state: Arc<WriterState>) -> Router {
    let api = Router::new()
        .route("/fetch", post(fetch_and_store))
        .with_state(state);

    service_router(PREFIX, api)
}

/// POST /api/randomnumbers/fetch
///
/// 400 when the request is invalid or no draw succeeded, 500 when the
/// storage tier did not accept the batch.
pub async fn fetch_and_store(
    State(state): State<Arc<WriterState>>,
    request: Result<Query<FetchRequest>, QueryRejection>,
) -> Result<Json<FetchResponse>, ApiError> {
    let Query(request) = request.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let report = state.orchestrator.fetch_and_store(request).await?;

    Ok(Json(FetchResponse {
        message: format!(
            "Successfully fetched and stored {} random numbers",
            report.fetched()
        ),
        requested: report.requested,
        fetched: report.fetched(),
        numbers: report.numbers,
    }))
}
