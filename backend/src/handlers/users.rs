// src/handlers/users.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    handlers::check_identifier,
    models::{
        course::{CourseProgress, EnrollRequest, EnrollResponse, UserProgressResponse},
        recommendation::LearningPathRequest,
    },
    services::recommender,
    state::AppState,
};

/// Per-course progress assembled from stored quiz results and notes.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;

    let results: HashMap<String, _> = state
        .results
        .list_for_user(&user_id)
        .await?
        .into_iter()
        .map(|r| (r.course_id.clone(), r))
        .collect();
    let notes: HashMap<String, _> = state
        .notes
        .list_for_user(&user_id)
        .await?
        .into_iter()
        .map(|n| (n.course_id.clone(), n))
        .collect();

    let progress = state
        .catalog
        .courses
        .iter()
        .map(|course| {
            let result = results.get(&course.course_id);
            let note = notes.get(&course.course_id);
            let last_accessed = [
                result.map(|r| r.submitted_at),
                note.map(|n| n.updated_at),
            ]
            .into_iter()
            .flatten()
            .max();

            CourseProgress {
                course_id: course.course_id.clone(),
                quiz_score: result.map(|r| r.percentage),
                quiz_passed: result.is_some_and(|r| r.passed),
                has_notes: note.is_some_and(|n| !n.content.trim().is_empty()),
                last_accessed,
            }
        })
        .collect();

    Ok(Json(UserProgressResponse { user_id, progress }))
}

/// Suggests the next courses. Passed quizzes count as completed courses
/// in addition to the ones listed in the request.
pub async fn learning_path(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<LearningPathRequest>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;

    let mut completed = req.completed_courses;
    for record in state.results.list_for_user(&user_id).await? {
        if record.passed && !completed.contains(&record.course_id) {
            completed.push(record.course_id);
        }
    }

    let suggestions = recommender::learning_path(&state.catalog.courses, &completed);

    Ok(Json(json!({
        "user_id": user_id,
        "completed_courses": completed,
        "suggestions": suggestions,
    })))
}

/// Checks the requested courses exist and echoes the enrollment.
pub async fn enroll(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<EnrollRequest>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;

    if req.course_ids.is_empty() {
        return Err(AppError::BadRequest("No courses selected".to_string()));
    }

    let unknown: Vec<&str> = req
        .course_ids
        .iter()
        .filter(|id| !state.catalog.has_course(id))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(AppError::NotFound(format!(
            "Unknown courses: {}",
            unknown.join(", ")
        )));
    }

    let mut enrolled: Vec<String> = Vec::with_capacity(req.course_ids.len());
    for id in req.course_ids {
        if !enrolled.contains(&id) {
            enrolled.push(id);
        }
    }

    tracing::info!("User {} enrolled in {:?}", user_id, enrolled);

    Ok(Json(EnrollResponse {
        message: format!("Successfully enrolled in {} course(s)", enrolled.len()),
        user_id,
        enrolled,
    }))
}
