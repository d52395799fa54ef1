// src/models/course.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: u32,
    pub title: String,
    pub duration: String,
}

/// A course as described in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub description: String,
    /// "beginner", "intermediate" or "advanced".
    pub difficulty: String,
    pub duration: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Course ids that should be completed first.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

/// Listing DTO: module details collapsed to a count.
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub modules: usize,
    pub topics: Vec<String>,
}

impl From<&Course> for CourseSummary {
    fn from(c: &Course) -> Self {
        Self {
            course_id: c.course_id.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            difficulty: c.difficulty.clone(),
            duration: c.duration.clone(),
            modules: c.modules.len(),
            topics: c.topics.clone(),
        }
    }
}

/// Per-course progress assembled from stored results and notes.
#[derive(Debug, Serialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub quiz_score: Option<f64>,
    pub quiz_passed: bool,
    pub has_notes: bool,
    pub last_accessed: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Serialize)]
pub struct UserProgressResponse {
    pub user_id: String,
    pub progress: Vec<CourseProgress>,
}

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub user_id: String,
    pub enrolled: Vec<String>,
    pub message: String,
}
