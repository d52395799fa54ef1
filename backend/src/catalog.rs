// src/catalog.rs

use std::{
    collections::{HashMap, HashSet},
    fmt,
    path::Path,
};

use serde::Deserialize;

use crate::{
    models::{
        artifact::{Artifact, ArtifactTypeInfo},
        chat::KnowledgeChunk,
        course::Course,
        discovery::DiscoveryConfig,
        question::QuizDefinition,
        recommendation::RecommendationResource,
    },
    services::{
        chatbot::CourseChatbot, discovery::DiscoveryAgent, question_bank::QuestionBank,
        recommender::ResourceTable,
    },
};

/// Catalog bundled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// The document parsed but is internally inconsistent.
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "failed to read catalog: {}", e),
            CatalogError::Parse(e) => write!(f, "failed to parse catalog: {}", e),
            CatalogError::Invalid(msg) => write!(f, "invalid catalog: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    courses: Vec<Course>,
    #[serde(default)]
    quizzes: HashMap<String, QuizDefinition>,
    #[serde(default)]
    resources: HashMap<String, HashMap<String, RecommendationResource>>,
    #[serde(default)]
    artifact_types: Vec<ArtifactTypeInfo>,
    #[serde(default)]
    artifacts: HashMap<String, Vec<Artifact>>,
    #[serde(default)]
    knowledge_base: HashMap<String, Vec<KnowledgeChunk>>,
    #[serde(default)]
    chat_fallbacks: HashMap<String, String>,
    discovery: DiscoveryConfig,
}

/// Every static table the service reads, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog order is preserved for listings.
    pub courses: Vec<Course>,
    pub question_bank: QuestionBank,
    pub resources: ResourceTable,
    pub artifact_types: Vec<ArtifactTypeInfo>,
    pub artifacts: HashMap<String, Vec<Artifact>>,
    pub chatbot: CourseChatbot,
    pub discovery: DiscoveryAgent,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        validate(&doc)?;

        let titles = doc
            .courses
            .iter()
            .map(|c| (c.course_id.clone(), c.title.clone()))
            .collect();

        Ok(Self {
            courses: doc.courses,
            question_bank: QuestionBank::new(doc.quizzes),
            resources: ResourceTable::new(doc.resources),
            artifact_types: doc.artifact_types,
            artifacts: doc.artifacts,
            chatbot: CourseChatbot::new(doc.knowledge_base, doc.chat_fallbacks),
            discovery: DiscoveryAgent::new(doc.discovery, titles),
        })
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Reads `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Self::from_path(path)
            }
            None => Self::embedded(),
        }
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    pub fn has_course(&self, course_id: &str) -> bool {
        self.course(course_id).is_some()
    }

    /// Artifacts of a course; empty for unknown courses.
    pub fn artifacts_for(&self, course_id: &str) -> &[Artifact] {
        self.artifacts
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn validate(doc: &CatalogDocument) -> Result<(), CatalogError> {
    let known: HashSet<&str> = doc.courses.iter().map(|c| c.course_id.as_str()).collect();

    for (course_id, quiz) in &doc.quizzes {
        if !known.contains(course_id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "quiz defined for unknown course '{}'",
                course_id
            )));
        }

        let mut seen = HashSet::new();
        for q in &quiz.questions {
            if !seen.insert(q.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate question id '{}' in course '{}'",
                    q.id, course_id
                )));
            }
            if q.options.len() < 2 {
                return Err(CatalogError::Invalid(format!(
                    "question '{}' needs at least two options",
                    q.id
                )));
            }
            if q.correct_index < 0 || q.correct_index as usize >= q.options.len() {
                return Err(CatalogError::Invalid(format!(
                    "question '{}' has correct_index {} outside its {} options",
                    q.id,
                    q.correct_index,
                    q.options.len()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(quizzes: &str) -> String {
        format!(
            r#"{{
                "courses": [{{
                    "course_id": "c1", "title": "Course One", "description": "d",
                    "difficulty": "beginner", "duration": "1 hour"
                }}],
                "quizzes": {},
                "discovery": {{ "courses": [], "roles": [], "interests": [] }}
            }}"#,
            quizzes
        )
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        let ids: Vec<&str> = catalog.courses.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["xm-cloud-101", "search-fundamentals", "content-hub-101"]);
        assert_eq!(catalog.question_bank.question_count("xm-cloud-101"), 5);
        assert_eq!(catalog.artifact_types.len(), 5);
        assert!(!catalog.artifacts_for("xm-cloud-101").is_empty());
        assert!(catalog.artifacts_for("nope").is_empty());
    }

    #[test]
    fn test_minimal_document() {
        let catalog = Catalog::from_json(&doc("{}")).unwrap();
        assert!(catalog.has_course("c1"));
        assert!(catalog.question_bank.get_questions("c1").is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let quizzes = r#"{"c1": {"title": "Q", "questions": [
            {"id": "q1", "prompt": "p", "options": ["a", "b"], "correct_index": 2, "topic": "t"}
        ]}}"#;
        assert!(matches!(
            Catalog::from_json(&doc(quizzes)),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids_and_single_option() {
        let dup = r#"{"c1": {"title": "Q", "questions": [
            {"id": "q1", "prompt": "p", "options": ["a", "b"], "correct_index": 0, "topic": "t"},
            {"id": "q1", "prompt": "p", "options": ["a", "b"], "correct_index": 1, "topic": "t"}
        ]}}"#;
        assert!(matches!(Catalog::from_json(&doc(dup)), Err(CatalogError::Invalid(_))));

        let single = r#"{"c1": {"title": "Q", "questions": [
            {"id": "q1", "prompt": "p", "options": ["a"], "correct_index": 0, "topic": "t"}
        ]}}"#;
        assert!(matches!(Catalog::from_json(&doc(single)), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_rejects_quiz_for_unknown_course() {
        let quizzes = r#"{"ghost": {"title": "Q", "questions": []}}"#;
        assert!(matches!(
            Catalog::from_json(&doc(quizzes)),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_and_io_errors() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            Catalog::from_path(Path::new("/definitely/not/here.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
