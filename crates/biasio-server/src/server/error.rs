use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message returned when a request carries no usable text
pub const EMPTY_MESSAGE: &str = "Please enter a message.";

/// Errors surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, blank or unparseable message
    #[error("Please enter a message.")]
    EmptyMessage,

    #[error("{0}")]
    Internal(String),
}

impl From<biasio_core::Error> for AppError {
    fn from(err: biasio_core::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_text() {
        assert_eq!(AppError::EmptyMessage.to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::EmptyMessage.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        let err: AppError = biasio_core::Error::internal("boom").into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
