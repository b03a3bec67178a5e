use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;

use crate::error::RelayError;

/// `axum::Json` whose rejections render through [`RelayError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RelayError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> RelayError {
    let status = rejection.status();
    let message = match &rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            match extract_missing_field(&message) {
                Some(field) => format!("Missing required field: {field}"),
                None => format!("Invalid JSON: {message}"),
            }
        }
        JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing `Content-Type: application/json` header".to_string()
        }
        JsonRejection::BytesRejection(err) => {
            tracing::error!(error = %err.body_text(), "Failed to read request body");
            return RelayError::Internal("Failed to read request body".to_string());
        }
        other => other.body_text(),
    };

    // Malformed bodies are all reported as 422, matching field-level failures.
    let status = if status == StatusCode::BAD_REQUEST {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        status
    };

    tracing::warn!(status = %status, reason = %message, "Rejected request body");

    RelayError::InvalidRequest { status, message }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
