//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::error::IngestError;
use crate::types::MessageResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Every failure a handler can answer with; the body is always `{message}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 - the request itself is unusable
    BadRequest(String),
    /// 404 - the addressed record does not exist
    NotFound(String),
    /// 500 with a message that is safe to show the caller
    ServerError(String),
    /// 500 with no detail at all
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServerError(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::ServerError(m) => m,
            ApiError::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::InvalidRequest { .. } | IngestError::NothingFetched { .. } => {
                ApiError::BadRequest(e.to_string())
            }
            IngestError::StorageUnavailable { fetched } => {
                error!(fetched, "fetch run failed at storage submission");
                ApiError::ServerError(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_errors_map_to_status() {
        let invalid: ApiError = IngestError::InvalidRequest {
            reason: "count must be at least 1".to_string(),
        }
        .into();
        let nothing: ApiError = IngestError::NothingFetched { requested: 5 }.into();
        let storage: ApiError = IngestError::StorageUnavailable { fetched: 3 }.into();

        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(nothing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            storage,
            ApiError::ServerError("Failed to store numbers in Storage API".to_string())
        );
    }

    #[test]
    fn test_internal_hides_detail() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
