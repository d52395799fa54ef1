// src/handlers/discovery.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    catalog::Catalog,
    error::AppError,
    models::discovery::{DiscoverableCourse, DiscoveryRequest},
};

/// Runs one turn of the course discovery conversation.
pub async fn discover(
    State(catalog): State<Arc<Catalog>>,
    Json(req): Json<DiscoveryRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    Ok(Json(catalog.discovery.process_message(&req.message, &req.history)))
}

/// The agent keeps no server-side state; the client drops its history.
pub async fn reset() -> impl IntoResponse {
    Json(json!({
        "status": "reset",
        "message": "Conversation reset. Tell me about your role and what you'd like to learn!",
    }))
}

/// Courses the agent can recommend, with their matching keywords and roles.
pub async fn list_courses(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    let courses: Vec<DiscoverableCourse> = catalog
        .discovery
        .courses()
        .iter()
        .filter_map(|profile| {
            let course = catalog.course(&profile.course_id)?;
            Some(DiscoverableCourse {
                course_id: profile.course_id.clone(),
                title: course.title.clone(),
                keywords: profile.keywords.clone(),
                difficulty: course.difficulty.clone(),
                roles: profile.roles.clone(),
            })
        })
        .collect();

    Json(courses)
}
