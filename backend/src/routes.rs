// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{artifacts, chat, courses, discovery, health, notes, quiz, results, users},
    state::AppState,
};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (courses, quiz, results, users, notes, artifacts, agents).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, catalog, repositories).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let course_routes = Router::new()
        .route("/", get(courses::list_courses))
        .route("/{course_id}", get(courses::get_course));

    let quiz_routes = Router::new()
        .route("/submit", post(quiz::submit_quiz))
        .route("/{course_id}", get(quiz::get_quiz))
        .route("/{course_id}/validate", post(quiz::validate_answers));

    let result_routes = Router::new()
        .route("/{user_id}", get(results::get_user_results))
        .route("/{user_id}/{course_id}", get(results::get_course_result))
        .route(
            "/{user_id}/{course_id}/next-steps",
            get(results::get_next_steps),
        );

    let user_routes = Router::new()
        .route("/{user_id}/progress", get(users::get_progress))
        .route("/{user_id}/learning-path", post(users::learning_path))
        .route("/{user_id}/enroll", post(users::enroll));

    let note_routes = Router::new()
        .route("/{user_id}", get(notes::list_notes))
        .route(
            "/{user_id}/{course_id}",
            get(notes::get_note)
                .post(notes::save_note)
                .put(notes::save_note)
                .delete(notes::delete_note),
        );

    let artifact_routes = Router::new()
        .route("/types", get(artifacts::list_types))
        .route("/{course_id}", get(artifacts::list_artifacts))
        .route("/{course_id}/{artifact_type}", get(artifacts::get_by_type))
        .route("/{course_id}/by-id/{artifact_id}", get(artifacts::get_by_id));

    let discovery_routes = Router::new()
        .route("/", post(discovery::discover))
        .route("/reset", post(discovery::reset))
        .route("/courses", get(discovery::list_courses));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest("/api/courses", course_routes)
        .nest("/api/quiz", quiz_routes)
        .route("/api/recommendations", post(quiz::recommendations))
        .nest("/api/results", result_routes)
        .nest("/api/users", user_routes)
        .nest("/api/notes", note_routes)
        .nest("/api/artifacts", artifact_routes)
        .nest("/api/discover", discovery_routes)
        .route("/api/chat", post(chat::chat))
        // Global Middleware (top to bottom: trace wraps cors)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
