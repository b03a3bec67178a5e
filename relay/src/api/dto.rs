use serde::{Deserialize, Serialize};

/// Body of `POST /send`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendResponse {
    pub response: String,
}
