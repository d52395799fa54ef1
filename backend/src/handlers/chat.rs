// src/handlers/chat.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{catalog::Catalog, config::CHAT_TOP_K, error::AppError, models::chat::ChatRequest};

/// Answers a question from the course knowledge base.
/// The client-held history is accepted but does not affect retrieval.
pub async fn chat(
    State(catalog): State<Arc<Catalog>>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    tracing::debug!(
        "Chat on {} ({} prior messages)",
        req.course_id,
        req.history.len()
    );

    Ok(Json(catalog.chatbot.respond(&req.course_id, &req.message, CHAT_TOP_K)))
}
