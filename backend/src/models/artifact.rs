// src/models/artifact.rs

use serde::{Deserialize, Serialize};

/// A downloadable learning artifact (mindmap, summary, slides, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub artifact_id: String,
    pub title: String,
    pub description: String,
    /// mindmap, summary, slides, cheatsheet or workflow.
    pub artifact_type: String,
    /// image, pdf or pptx.
    pub file_type: String,
    pub url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactTypeInfo {
    pub id: String,
    pub name: String,
    pub file_type: String,
}

#[derive(Debug, Serialize)]
pub struct ArtifactListResponse {
    pub course_id: String,
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Serialize)]
pub struct ArtifactTypesResponse {
    pub types: Vec<ArtifactTypeInfo>,
}
