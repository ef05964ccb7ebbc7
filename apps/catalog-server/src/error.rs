//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_store::CatalogError;
use entities::validation::ValidationErrors;
use serde_json::{Map, Value, json};

/// Machine-readable error codes carried in error bodies.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const INVALID_ARGUMENT: &str = "invalid_argument";
    pub const NOT_FOUND: &str = "not_found";
    pub const CONFLICT: &str = "conflict";
    pub const NOT_ALLOWED: &str = "not_allowed";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Error reported by the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST),
            ServerError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_FAILED),
            ServerError::Catalog(err) => match err {
                CatalogError::InvalidArgument(_) => {
                    (StatusCode::BAD_REQUEST, error_codes::INVALID_ARGUMENT)
                }
                CatalogError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
                CatalogError::Conflict(_) => (StatusCode::CONFLICT, error_codes::CONFLICT),
                CatalogError::NotAllowed(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, error_codes::NOT_ALLOWED)
                }
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        tracing::warn!(code = error_code, error = %self, "Request rejected");

        let mut error = json!({
            "code": error_code,
            "message": self.to_string(),
        });

        if let ServerError::Validation(validation) = &self {
            let fields: Map<String, Value> = validation
                .errors
                .iter()
                .map(|e| (e.field.to_string(), Value::String(e.message.clone())))
                .collect();
            error["fields"] = Value::Object(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ServerError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_catalog_error_statuses() {
        assert_eq!(
            status_of(CatalogError::not_found("User", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(CatalogError::conflict("dup")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(CatalogError::invalid_argument("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CatalogError::not_allowed("self")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_invalid_request_status() {
        assert_eq!(
            status_of(ServerError::InvalidRequest("bad id".to_string())),
            StatusCode::BAD_REQUEST
        );
    }
}
