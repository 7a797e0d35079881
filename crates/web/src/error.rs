use arena::ArenaError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Arena(ArenaError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Arena(e) => write!(f, "Ring error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

fn storage_status(error: &StorageError) -> StatusCode {
    match error {
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        StorageError::DuplicateName(_) => StatusCode::CONFLICT,
        StorageError::InvalidAttribute { .. } | StorageError::InvalidArgument(_) => {
            StatusCode::BAD_REQUEST
        }
        StorageError::Database(_) | StorageError::Migration(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(e) | Self::Arena(ArenaError::Storage(e)) => storage_status(e),
            Self::Arena(ArenaError::RingFull | ArenaError::InsufficientOccupants) => {
                StatusCode::CONFLICT
            }
            Self::Arena(ArenaError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Arena(ArenaError::Unavailable(_) | ArenaError::MalformedResponse(_)) => {
                StatusCode::BAD_GATEWAY
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", self);
            json!({
                "error": "An internal error occurred"
            })
        } else {
            let message = match &self {
                Self::Storage(e) => e.to_string(),
                Self::Arena(e) => e.to_string(),
                Self::BadRequest(msg) => msg.clone(),
            };
            json!({
                "error": message
            })
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ArenaError> for WebError {
    fn from(error: ArenaError) -> Self {
        Self::Arena(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
