// src/handlers/courses.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{catalog::Catalog, error::AppError, models::course::CourseSummary};

/// Lists all courses in catalog order.
pub async fn list_courses(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    let courses: Vec<CourseSummary> = catalog.courses.iter().map(CourseSummary::from).collect();
    Json(courses)
}

/// Retrieves a single course with its modules.
pub async fn get_course(
    State(catalog): State<Arc<Catalog>>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course = catalog
        .course(&course_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Course '{}' not found", course_id)))?;

    Ok(Json(course))
}
