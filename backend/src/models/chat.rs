// src/models/chat.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One turn of a conversation, as echoed back by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user" or "assistant".
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// A passage of course material the chatbot can cite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    pub chunk_id: String,
    pub content: String,
    pub module: String,
    pub timestamp: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceDocument {
    pub module: String,
    pub timestamp: String,
    pub content_type: String,
    pub relevance_score: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub sources: Vec<SourceDocument>,
    pub course_id: String,
}
