use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let chat_id = match &payload.chat_id {
        Some(id) if !id.trim().is_empty() => id.clone(),
        _ => Uuid::new_v4().to_string(),
    };

    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    // The raw text goes through untouched: token splitting and command
    // matching are sensitive to every space.
    let reply = generate_reply(&state, &payload.message).await;

    Ok(Json(ChatResponse { chat_id, reply }))
}
