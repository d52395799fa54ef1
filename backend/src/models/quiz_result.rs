// src/models/quiz_result.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::recommendation::Recommendation;

/// Allowed shape for user and course identifiers.
pub static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{1,64}$").expect("identifier regex is valid"));

/// Correct/total tally for one topic of a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub correct: u32,
    pub total: u32,
    pub percentage: f64,
}

/// Per-question outcome, in question bank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    /// `-1` when the question was left unanswered.
    pub user_answer: i64,
    pub correct_answer: i64,
    pub is_correct: bool,
    pub topic: String,
}

/// Result of scoring one submission against a question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub passed: bool,
    /// Topics in the order they first appear in the question bank.
    pub topic_scores: Vec<TopicScore>,
    pub question_results: Vec<QuestionResult>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(regex(path = *IDENTIFIER_REGEX))]
    pub user_id: String,

    #[validate(regex(path = *IDENTIFIER_REGEX))]
    pub course_id: String,

    /// User's answers map.
    /// Key: Question ID
    /// Value: Selected option index
    #[serde(default)]
    pub answers: std::collections::HashMap<String, i64>,
}

/// A scored attempt as persisted and returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub user_id: String,
    pub course_id: String,
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub passed: bool,
    pub topic_scores: Vec<TopicScore>,
    pub question_results: Vec<QuestionResult>,
    pub recommendations: Vec<Recommendation>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl QuizResultRecord {
    pub fn new(
        user_id: String,
        course_id: String,
        result: QuizResult,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            user_id,
            course_id,
            score: result.score,
            total: result.total,
            percentage: result.percentage,
            passed: result.passed,
            topic_scores: result.topic_scores,
            question_results: result.question_results,
            recommendations,
            submitted_at: chrono::Utc::now(),
        }
    }
}

/// All stored results of one user.
#[derive(Debug, Serialize)]
pub struct UserResultsResponse {
    pub user_id: String,
    pub results: Vec<QuizResultRecord>,
}
