//! Booking assistant gateway.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domains::booking::{validate, BOOKING_SYSTEM_INSTRUCTION};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
}

/// `POST /` - turn a free-text booking request into a constrained reply.
///
/// The caller's message goes to Gemini under the fixed booking
/// instruction; the raw response is passed through only once it validates
/// against one of the two permitted shapes. Every failure in the pipeline
/// maps to the same generic 500 payload so backend detail never leaks to
/// the caller.
pub async fn chat_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatErrorResponse>)> {
    let raw = state
        .deps
        .chat_model
        .generate(BOOKING_SYSTEM_INSTRUCTION, &request.message)
        .await
        .map_err(|e| {
            error!(error = %e, "Booking backend call failed");
            generic_error()
        })?;

    if let Err(e) = validate(&raw) {
        warn!(error = %e, "Booking backend output rejected");
        return Err(generic_error());
    }

    Ok(Json(ChatResponse { text: raw }))
}

fn generic_error() -> (StatusCode, Json<ChatErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatErrorResponse {
            error: "Gemini failed".to_string(),
        }),
    )
}
