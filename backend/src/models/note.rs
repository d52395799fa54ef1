// src/models/note.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::text::word_count;

/// Represents the 'notes' table in the database.
/// One note document per (user, course).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub user_id: String,
    pub course_id: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating or replacing a note.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteContent {
    #[validate(length(max = 50000))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub user_id: String,
    pub course_id: String,
    pub content: String,
    /// `None` until the note is first saved.
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub word_count: usize,
}

impl NoteResponse {
    /// Placeholder returned for a course without a note.
    pub fn empty(user_id: String, course_id: String) -> Self {
        Self {
            user_id,
            course_id,
            content: String::new(),
            last_updated: None,
            word_count: 0,
        }
    }
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            word_count: word_count(&note.content),
            user_id: note.user_id,
            course_id: note.course_id,
            content: note.content,
            last_updated: Some(note.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserNotesResponse {
    pub user_id: String,
    pub notes: Vec<NoteResponse>,
}
