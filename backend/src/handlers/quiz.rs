// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    catalog::Catalog,
    config::{DEFAULT_RECOMMENDATION_THRESHOLD, QUIZ_TIME_LIMIT_MINUTES},
    error::AppError,
    models::{
        question::{AnswerSubmission, PublicQuestion, QuizResponse},
        quiz_result::{QuizResultRecord, SubmitQuizRequest},
        recommendation::RecommendRequest,
    },
    services::{recommender, scorer},
    state::AppState,
};

/// Returns the course quiz without the correct answers.
pub async fn get_quiz(
    State(catalog): State<Arc<Catalog>>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bank = &catalog.question_bank;
    let questions = bank.get_questions(&course_id);
    if questions.is_empty() {
        return Err(scorer::QuizError::NotFound(course_id).into());
    }

    Ok(Json(QuizResponse {
        title: bank.title(&course_id).unwrap_or_default().to_string(),
        questions: questions.iter().map(PublicQuestion::from).collect(),
        topics: bank.topics(&course_id).into_iter().map(str::to_string).collect(),
        time_limit_minutes: QUIZ_TIME_LIMIT_MINUTES,
        course_id,
    }))
}

/// Reports unanswered questions before a submission.
pub async fn validate_answers(
    State(catalog): State<Arc<Catalog>>,
    Path(course_id): Path<String>,
    Json(answers): Json<AnswerSubmission>,
) -> Result<impl IntoResponse, AppError> {
    if catalog.question_bank.get_questions(&course_id).is_empty() {
        return Err(scorer::QuizError::NotFound(course_id).into());
    }

    Ok(Json(
        catalog.question_bank.validate_answers(&course_id, &answers),
    ))
}

/// Scores a quiz attempt and stores it.
///
/// * Unanswered questions count as wrong.
/// * Weak topics get recommendations at the default threshold.
/// * A retake replaces the previous stored result.
pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let result = scorer::score_course(&state.catalog.question_bank, &req.course_id, &req.answers)?;
    let recommendations = recommender::recommend(
        &state.catalog.resources,
        &req.course_id,
        &result.topic_scores,
        DEFAULT_RECOMMENDATION_THRESHOLD,
    );

    let record = QuizResultRecord::new(req.user_id, req.course_id, result, recommendations);

    state.results.put(&record).await.map_err(|e| {
        tracing::error!("Failed to store quiz result: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(
        "User {} scored {}/{} on {}",
        record.user_id,
        record.score,
        record.total,
        record.course_id
    );

    Ok(Json(record))
}

/// Builds recommendations for caller-supplied topic scores.
pub async fn recommendations(
    State(catalog): State<Arc<Catalog>>,
    Json(req): Json<RecommendRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let threshold = req.threshold.unwrap_or(DEFAULT_RECOMMENDATION_THRESHOLD);
    let recommendations =
        recommender::recommend(&catalog.resources, &req.course_id, &req.topic_scores, threshold);

    Ok(Json(json!({
        "course_id": req.course_id,
        "threshold": threshold,
        "recommendations": recommendations,
    })))
}
