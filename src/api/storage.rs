//! Storage tier endpoints - server half of the exchange protocol
//!
//! - `POST   /api/storage/numbers`      - store a batch
//! - `GET    /api/storage/numbers`      - list every record, newest first
//! - `GET    /api/storage/numbers/:id`  - single record
//! - `GET    /api/storage/stats`        - live count
//! - `DELETE /api/storage/numbers`      - clear everything

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::error::ApiError;
use super::http::service_router;
use crate::storage::RecordStore;
use crate::types::{
    sort_newest_first, MessageResponse, NumbersResponse, Record, StorageStats,
    StoreNumbersResponse,
};

pub const PREFIX: &str = "/api/storage";

/// Shared state of the storage tier
pub struct StorageState {
    pub store: Arc<dyn RecordStore>,
}

impl StorageState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// Create the storage tier router
pub fn create_router(state: Arc<StorageState>) -> Router {
    let api = Router::new()
        .route(
            "/numbers",
            get(get_all_numbers).post(store_numbers).delete(clear_all),
        )
        .route("/numbers/:id", get(get_number_by_id))
        .route("/stats", get(get_stats))
        .with_state(state);

    service_router(PREFIX, api)
}

/// POST /api/storage/numbers
///
/// An absent, malformed or empty body is a client error. The reported count
/// is the number submitted; ids already present are absorbed silently.
pub async fn store_numbers(
    State(state): State<Arc<StorageState>>,
    body: Option<Json<Vec<Record>>>,
) -> Result<Json<StoreNumbersResponse>, ApiError> {
    let numbers = match body {
        Some(Json(numbers)) if !numbers.is_empty() => numbers,
        _ => return Err(ApiError::bad_request("No numbers provided")),
    };

    let count = numbers.len();
    state.store.insert_many(numbers);
    info!(count, "stored numbers");

    Ok(Json(StoreNumbersResponse {
        message: format!("Successfully stored {} numbers", count),
        count,
    }))
}

/// GET /api/storage/numbers
pub async fn get_all_numbers(State(state): State<Arc<StorageState>>) -> Json<NumbersResponse> {
    let mut numbers = state.store.get_all();
    sort_newest_first(&mut numbers);
    info!(count = numbers.len(), "retrieved numbers");
    Json(NumbersResponse::new(numbers))
}

/// GET /api/storage/numbers/:id
pub async fn get_number_by_id(
    State(state): State<Arc<StorageState>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(format!("'{}' is not a valid number ID", id)))?;

    match state.store.get(&id) {
        Some(number) => Ok(Json(number)),
        None => {
            warn!(%id, "number not found");
            Err(ApiError::not_found(format!("Number with ID {} not found", id)))
        }
    }
}

/// GET /api/storage/stats
pub async fn get_stats(State(state): State<Arc<StorageState>>) -> Json<StorageStats> {
    let count = state.store.count();
    Json(StorageStats {
        total_numbers: count,
        message: format!("Currently {} random numbers in storage", count),
    })
}

/// DELETE /api/storage/numbers
pub async fn clear_all(State(state): State<Arc<StorageState>>) -> Json<MessageResponse> {
    state.store.clear_all();
    info!("cleared all numbers");
    Json(MessageResponse::new("All numbers cleared"))
}
