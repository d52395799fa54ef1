// src/models/discovery.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::chat::ChatMessage;

/// Matching profile of a course for the discovery agent.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryCourse {
    pub course_id: String,
    pub keywords: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleKeywords {
    pub role: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterestKeywords {
    pub interest: String,
    pub keywords: Vec<String>,
}

/// Discovery section of the catalog. Role and interest order is significant.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub courses: Vec<DiscoveryCourse>,
    pub roles: Vec<RoleKeywords>,
    pub interests: Vec<InterestKeywords>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DiscoveryRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendation {
    pub course_id: String,
    pub title: String,
    pub reason: String,
    pub score: u32,
}

/// A course the discovery agent can recommend, as listed to clients.
#[derive(Debug, Serialize)]
pub struct DiscoverableCourse {
    pub course_id: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub difficulty: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub message: String,
    pub has_recommendations: bool,
    pub recommended_courses: Vec<CourseRecommendation>,
    pub conversation_complete: bool,
}
