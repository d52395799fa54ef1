// src/handlers/notes.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::check_identifier,
    models::note::{Note, NoteContent, NoteResponse, UserNotesResponse},
    state::AppState,
};

/// Returns the note for a course, or an empty note if none was saved yet.
pub async fn get_note(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;
    check_identifier("course id", &course_id)?;

    let response = match state.notes.get(&user_id, &course_id).await? {
        Some(note) => NoteResponse::from(note),
        None => NoteResponse::empty(user_id, course_id),
    };

    Ok(Json(response))
}

/// Creates or replaces the note of a course.
/// Content is Markdown and is stored as written.
pub async fn save_note(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
    Json(payload): Json<NoteContent>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;
    check_identifier("course id", &course_id)?;
    payload.validate()?;

    let now = chrono::Utc::now();
    let note = Note {
        user_id,
        course_id,
        content: payload.content,
        created_at: now,
        updated_at: now,
    };

    let saved = state.notes.put(&note).await.map_err(|e| {
        tracing::error!("Failed to save note: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(NoteResponse::from(saved)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;
    check_identifier("course id", &course_id)?;

    if !state.notes.delete(&user_id, &course_id).await? {
        return Err(AppError::NotFound("Note not found".to_string()));
    }

    Ok(Json(json!({ "message": "Note deleted successfully" })))
}

/// All notes of a user, ordered by course id.
pub async fn list_notes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;

    let notes = state
        .notes
        .list_for_user(&user_id)
        .await?
        .into_iter()
        .map(NoteResponse::from)
        .collect();

    Ok(Json(UserNotesResponse { user_id, notes }))
}
