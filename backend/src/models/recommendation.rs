// src/models/recommendation.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::quiz_result::TopicScore;

/// Urgency tier of a remedial recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tier for a topic percentage: below 40 is high, below 60 is medium.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Priority::High
        } else if score < 60.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Sort rank, worst first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Study material suggested for a weak topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResource {
    pub module_label: String,
    pub artifact_type: String,
    pub tip_text: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: String,
    /// The topic percentage this recommendation was derived from.
    pub score: f64,
    pub priority: Priority,
    pub module_label: String,
    pub artifact_type: String,
    pub tip_text: String,
    pub resources: Vec<String>,
}

/// DTO for requesting recommendations for arbitrary topic scores.
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,
    pub topic_scores: Vec<TopicScore>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Excellent,
    Passed,
    Almost,
    NeedsWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Gold,
    Silver,
}

/// Overall guidance after a quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextSteps {
    pub status: ProgressStatus,
    pub message: String,
    pub next_steps: Vec<String>,
    pub badge: Option<Badge>,
}

/// A course the learner can take next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSuggestion {
    pub course_id: String,
    pub title: String,
    pub reason: String,
    pub recommended: bool,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    #[serde(default)]
    pub completed_courses: Vec<String>,
}
