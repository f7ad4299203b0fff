use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;
use crate::modules::chat::schema::{ChatRequest, ChatResponse};
use crate::services::responder;

pub async fn chat(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected chat request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    tracing::info!(
        chat_message = %payload.message,
        context = ?payload.context,
        history = ?payload.history,
        "Received chat message"
    );

    Ok(Json(responder::respond(&payload.message)))
}
