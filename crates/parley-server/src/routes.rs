//! HTTP routes for the chat operation

use crate::error::ApiError;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use parley_core::MessageProcessor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<MessageProcessor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!(
        user_id = %request.user_id,
        message_len = request.message.len(),
        "Chat request received"
    );

    let reply = state
        .processor
        .process(&request.message, &request.user_id)
        .await?;

    Ok(Json(ChatResponse { reply }))
}

async fn health() -> &'static str {
    "ok"
}
