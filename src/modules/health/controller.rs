use axum::{extract::State, Json};

use crate::error::MessageResponse;
use crate::AppState;

/// Liveness probe.
pub async fn root(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} is running!", state.settings.service_name),
    })
}
