// src/handlers/artifacts.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use url::Url;

use crate::{
    error::AppError,
    models::artifact::{Artifact, ArtifactListResponse, ArtifactTypesResponse},
    state::AppState,
};

/// Resolves a relative artifact URL against the configured asset base.
/// Absolute URLs, and every URL when no base is configured, pass through.
fn resolve_url(base: Option<&Url>, mut artifact: Artifact) -> Artifact {
    if let (Some(base), Some(raw)) = (base, artifact.url.as_deref()) {
        if Url::parse(raw).is_err() {
            match base.join(raw) {
                Ok(resolved) => artifact.url = Some(resolved.to_string()),
                Err(e) => tracing::warn!("Cannot resolve artifact url {}: {}", raw, e),
            }
        }
    }
    artifact
}

pub async fn list_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(ArtifactTypesResponse {
        types: state.catalog.artifact_types.clone(),
    })
}

/// Lists the artifacts of a course; unknown courses yield an empty list.
pub async fn list_artifacts(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    let base = state.config.asset_base_url.as_ref();
    let artifacts = state
        .catalog
        .artifacts_for(&course_id)
        .iter()
        .cloned()
        .map(|a| resolve_url(base, a))
        .collect();

    Json(ArtifactListResponse {
        course_id,
        artifacts,
    })
}

/// First artifact of the given type.
pub async fn get_by_type(
    State(state): State<AppState>,
    Path((course_id, artifact_type)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let artifact = state
        .catalog
        .artifacts_for(&course_id)
        .iter()
        .find(|a| a.artifact_type == artifact_type)
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No {} artifact for course '{}'",
                artifact_type, course_id
            ))
        })?;

    Ok(Json(resolve_url(state.config.asset_base_url.as_ref(), artifact)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path((course_id, artifact_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let artifact = state
        .catalog
        .artifacts_for(&course_id)
        .iter()
        .find(|a| a.artifact_id == artifact_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Artifact '{}' not found", artifact_id)))?;

    Ok(Json(resolve_url(state.config.asset_base_url.as_ref(), artifact)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(url: Option<&str>) -> Artifact {
        Artifact {
            artifact_id: "a1".into(),
            title: "Mindmap".into(),
            description: String::new(),
            artifact_type: "mindmap".into(),
            file_type: "image".into(),
            url: url.map(str::to_string),
            available: true,
        }
    }

    #[test]
    fn test_resolve_relative_url() {
        let base = Url::parse("https://cdn.example.com/assets/").unwrap();
        let resolved = resolve_url(Some(&base), artifact(Some("xm/mindmap.png")));
        assert_eq!(
            resolved.url.as_deref(),
            Some("https://cdn.example.com/assets/xm/mindmap.png")
        );
    }

    #[test]
    fn test_absolute_and_missing_urls_untouched() {
        let base = Url::parse("https://cdn.example.com/").unwrap();
        let abs = resolve_url(Some(&base), artifact(Some("https://other.test/x.pdf")));
        assert_eq!(abs.url.as_deref(), Some("https://other.test/x.pdf"));

        assert!(resolve_url(Some(&base), artifact(None)).url.is_none());
        assert_eq!(
            resolve_url(None, artifact(Some("/static/x.pdf"))).url.as_deref(),
            Some("/static/x.pdf")
        );
    }
}
