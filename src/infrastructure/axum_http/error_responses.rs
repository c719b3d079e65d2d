use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::domain::errors::webinars::WebinarError;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<WebinarError> for AppError {
    fn from(err: WebinarError) -> Self {
        match err {
            WebinarError::NotFound => AppError::NotFound(err.to_string()),
            WebinarError::NotOrganizer => AppError::Unauthorized(err.to_string()),
            WebinarError::ReduceSeats | WebinarError::TooManySeats => {
                AppError::BadRequest(err.to_string())
            }
            WebinarError::Storage(source) => AppError::Internal(source),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(err) => {
                // Don't leak internal error detail to client
                error!(error = ?err, "http: internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn status_of(err: WebinarError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn webinar_errors_map_to_status_codes() {
        assert_eq!(status_of(WebinarError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(WebinarError::NotOrganizer), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(WebinarError::ReduceSeats), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(WebinarError::TooManySeats), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(WebinarError::Storage(anyhow!("pool timed out"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_detail_is_not_exposed() {
        let app_error = AppError::from(WebinarError::Storage(anyhow!("password=hunter2")));

        assert_eq!(app_error.to_string(), "Internal server error");
    }
}
