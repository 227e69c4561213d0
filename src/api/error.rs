use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::db::models::InvalidScale;
use crate::db::StoreError;

/// Gateway failure taxonomy.
///
/// `Validation` is malformed or incomplete client input, `NotFound` a
/// well-formed lookup whose entity is absent from the primary store,
/// `Internal` a backend failure or an internally detected anomaly.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Internal(String),
}

/// Failure envelope: machine-readable code plus human-readable message.
/// Diagnostic detail never leaves the logs.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // The submission contract reports validation failures with the
            // same status as internal ones; the message carries the reason.
            ApiError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    /// Classify a store outcome by matching its tagged variant. Message
    /// content is never inspected; backend detail is logged and replaced
    /// with a generic message on the wire.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::Backend(err) => {
                error!("store backend failure: {:#}", err);
                ApiError::Internal("internal server error".to_string())
            },
        }
    }
}

impl From<InvalidScale> for ApiError {
    fn from(err: InvalidScale) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entity_classifies_as_not_found() {
        let err = ApiError::from(StoreError::NotFound("quotation"));
        assert!(matches!(err, ApiError::NotFound("quotation")));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_failure_classifies_as_internal() {
        let err = ApiError::from(StoreError::Backend(anyhow::anyhow!("connection refused")));
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Backend detail is sanitized out of the wire message
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn test_validation_reports_observed_status() {
        let err = ApiError::Validation("missing symbol".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "missing symbol");
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::NotFound("supply");
        let status = err.status();
        let body = ErrorBody {
            code: status.as_u16(),
            message: err.to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "supply not found");
    }
}
