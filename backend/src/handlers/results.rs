// src/handlers/results.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    handlers::check_identifier,
    models::quiz_result::{QuizResultRecord, UserResultsResponse},
    services::recommender,
    state::AppState,
};

async fn stored_result(
    state: &AppState,
    user_id: &str,
    course_id: &str,
) -> Result<QuizResultRecord, AppError> {
    check_identifier("user id", user_id)?;
    check_identifier("course id", course_id)?;

    state.results.get(user_id, course_id).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "No quiz result for user '{}' in course '{}'",
            user_id, course_id
        ))
    })
}

/// Lists every stored result of a user, ordered by course id.
pub async fn get_user_results(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    check_identifier("user id", &user_id)?;

    let results = state.results.list_for_user(&user_id).await?;
    Ok(Json(UserResultsResponse { user_id, results }))
}

pub async fn get_course_result(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let record = stored_result(&state, &user_id, &course_id).await?;
    Ok(Json(record))
}

/// Guidance derived from the stored attempt, with its recommendations.
pub async fn get_next_steps(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let record = stored_result(&state, &user_id, &course_id).await?;
    let steps = recommender::next_steps(record.percentage, record.passed);

    Ok(Json(json!({
        "user_id": record.user_id,
        "course_id": record.course_id,
        "percentage": record.percentage,
        "passed": record.passed,
        "status": steps.status,
        "message": steps.message,
        "next_steps": steps.next_steps,
        "badge": steps.badge,
        "recommendations": record.recommendations,
    })))
}
