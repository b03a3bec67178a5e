use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Detail returned to callers for every failure that did not come from upstream.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum RelayError {
    /// Upstream answered with a non-success status.
    #[error("Upstream API returned {status}: {detail}")]
    Upstream { status: StatusCode, detail: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// The inbound request body could not be read as a prompt.
    #[error("Invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Upstream { status, .. } => *status,
            RelayError::InvalidRequest { status, .. } => *status,
            RelayError::Http(_) | RelayError::Json(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            RelayError::Upstream { .. } => self.to_string(),
            RelayError::InvalidRequest { message, .. } => message.clone(),
            // Internal failures are logged where they occur; the caller only sees the generic text.
            RelayError::Http(_) | RelayError::Json(_) | RelayError::Internal(_) => {
                INTERNAL_ERROR_DETAIL.to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
