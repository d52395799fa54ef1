// src/handlers/health.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::catalog::Catalog;

/// Service banner.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Course Companion API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// Liveness check. A failed database ping reports `degraded` with status 200.
pub async fn health(
    State(pool): State<SqlitePool>,
    State(catalog): State<Arc<Catalog>>,
) -> impl IntoResponse {
    let database = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::warn!("Health check database ping failed: {:?}", e);
            "unavailable"
        }
    };

    let status = if database == "connected" { "healthy" } else { "degraded" };

    Json(json!({
        "status": status,
        "database": database,
        "services": {
            "quiz_engine": "ready",
            "recommender": "ready",
            "chatbot": "ready",
            "discovery": "ready",
            "courses": catalog.courses.len(),
        },
    }))
}
