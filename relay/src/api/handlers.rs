use axum::extract::State;
use axum::Json;

use crate::api::dto::{SendRequest, SendResponse};
use crate::api::extractors::AppJson;
use crate::api::state::AppState;
use crate::error::Result;
use crate::llm::preview;

/// `POST /send`
pub async fn send(
    State(state): State<AppState>,
    AppJson(request): AppJson<SendRequest>,
) -> Result<Json<SendResponse>> {
    tracing::info!(prompt = %request.prompt, "Received prompt");

    let response = state.llm.send_message(&request.prompt).await?;

    tracing::info!(
        response_len = response.len(),
        response_preview = %preview(&response),
        "Sent response"
    );

    Ok(Json(SendResponse { response }))
}
