//! Reader tier endpoints - query layer over the storage gateway
//!
//! - `GET /api/randomnumbers`          - every record, newest first
//! - `GET /api/randomnumbers/:id`      - single record
//! - `GET /api/randomnumbers/stats`    - min/max/average/oldest/newest
//! - `GET /api/randomnumbers/search`   - inclusive `minValue`/`maxValue` filter

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::error::ApiError;
use super::http::service_router;
use crate::gateway::StorageGateway;
use crate::query::QueryService;
use crate::types::{NumberStats, NumbersResponse, Record, SearchCriteria, SearchResponse};

pub const PREFIX: &str = "/api/randomnumbers";

/// Shared state of the reader tier
pub struct ReaderState {
    pub queries: QueryService,
}

impl ReaderState {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self {
            queries: QueryService::new(storage),
        }
    }
}

/// Create the reader tier router
pub fn create_router(state: Arc<ReaderState>) -> Router {
    let api = Router::new()
        .route("/", get(list_numbers))
        .route("/stats", get(get_stats))
        .route("/search", get(search_numbers))
        .route("/:id", get(get_number_by_id))
        .with_state(state);

    service_router(PREFIX, api)
}

/// GET /api/randomnumbers
pub async fn list_numbers(State(state): State<Arc<ReaderState>>) -> Json<NumbersResponse> {
    Json(state.queries.list().await)
}

/// GET /api/randomnumbers/:id
pub async fn get_number_by_id(
    State(state): State<Arc<ReaderState>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(format!("'{}' is not a valid number ID", id)))?;

    match state.queries.get(id).await {
        Some(number) => {
            info!(%id, "retrieved number");
            Ok(Json(number))
        }
        None => {
            warn!(%id, "number not found");
            Err(ApiError::not_found(format!("Number with ID {} not found", id)))
        }
    }
}

/// GET /api/randomnumbers/stats
pub async fn get_stats(State(state): State<Arc<ReaderState>>) -> Json<NumberStats> {
    Json(state.queries.stats().await)
}

/// GET /api/randomnumbers/search?minValue=&maxValue=
pub async fn search_numbers(
    State(state): State<Arc<ReaderState>>,
    criteria: Result<Query<SearchCriteria>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(criteria) = criteria.map_err(|e| ApiError::bad_request(e.body_text()))?;
    Ok(Json(state.queries.search(criteria).await))
}
