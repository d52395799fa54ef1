// src/models/question.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Informational difficulty tag; has no effect on scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A single-choice quiz question as defined in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within its course.
    pub id: String,

    /// The text shown to the learner.
    pub prompt: String,

    /// Ordered answer options (at least two).
    pub options: Vec<String>,

    /// Index into `options` of the correct answer.
    pub correct_index: i64,

    /// Topic tag used for the per-topic breakdown.
    pub topic: String,

    #[serde(default)]
    pub difficulty: Difficulty,
}

/// A course quiz: display title plus its ordered question bank.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDefinition {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Submitted answers keyed by question id.
/// Questions missing from the map are scored with the `-1` sentinel.
pub type AnswerSubmission = HashMap<String, i64>;

/// DTO for sending a question to the client (excludes the correct index).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            prompt: q.prompt.clone(),
            options: q.options.clone(),
            topic: q.topic.clone(),
            difficulty: q.difficulty,
        }
    }
}

/// DTO for returning a course quiz.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub course_id: String,
    pub title: String,
    pub questions: Vec<PublicQuestion>,
    /// Topics covered, in first-seen order.
    pub topics: Vec<String>,
    pub time_limit_minutes: u32,
}

/// Outcome of checking a submission for unanswered questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerValidation {
    pub valid: bool,
    pub total_questions: usize,
    pub answered: usize,
    /// Unanswered question ids, in question bank order.
    pub missing_questions: Vec<String>,
}
