// src/services/chatbot.rs

use std::collections::HashMap;

use crate::{
    models::chat::{ChatResponse, KnowledgeChunk, SourceDocument},
    utils::text::truncate_chars,
};

/// Characters of a related chunk quoted under "Related Information".
const RELATED_PREVIEW_CHARS: usize = 100;

/// A knowledge chunk together with its keyword-overlap score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk<'a> {
    pub chunk: &'a KnowledgeChunk,
    pub score: u32,
}

/// Course-scoped question answering over the catalog knowledge base.
///
/// Retrieval is plain keyword overlap; there is no embedding or generation step.
#[derive(Debug, Clone, Default)]
pub struct CourseChatbot {
    knowledge_base: HashMap<String, Vec<KnowledgeChunk>>,
    /// Course id -> short description of what the course covers.
    topic_summaries: HashMap<String, String>,
}

impl CourseChatbot {
    pub fn new(
        knowledge_base: HashMap<String, Vec<KnowledgeChunk>>,
        topic_summaries: HashMap<String, String>,
    ) -> Self {
        Self {
            knowledge_base,
            topic_summaries,
        }
    }

    /// Best `top_k` chunks of a course for `query`.
    ///
    /// Each query word scores +2 when found in the chunk content and +3 when
    /// found in the chunk topic. Chunks scoring zero are dropped.
    pub fn search(&self, course_id: &str, query: &str, top_k: usize) -> Vec<ScoredChunk<'_>> {
        let Some(chunks) = self.knowledge_base.get(course_id) else {
            return Vec::new();
        };

        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();

        let mut scored: Vec<ScoredChunk<'_>> = chunks
            .iter()
            .filter_map(|chunk| {
                let content = chunk.content.to_lowercase();
                let topic = chunk.topic.to_lowercase();
                let score: u32 = words
                    .iter()
                    .map(|w| {
                        let mut s = 0;
                        if content.contains(w) {
                            s += 2;
                        }
                        if topic.contains(w) {
                            s += 3;
                        }
                        s
                    })
                    .sum();
                (score > 0).then_some(ScoredChunk { chunk, score })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_k);
        scored
    }

    /// Answers a learner question from the course material.
    pub fn respond(&self, course_id: &str, message: &str, top_k: usize) -> ChatResponse {
        let hits = self.search(course_id, message, top_k);

        let text = match hits.split_first() {
            Some((top, related)) => {
                let mut text = format!(
                    "Based on the course materials, here's what I found:\n\n**{}**\n\n*Source: {} (Timestamp: {})*\n\n",
                    top.chunk.content, top.chunk.module, top.chunk.timestamp
                );
                if !related.is_empty() {
                    text.push_str("\n**Related Information:**\n");
                    for hit in related {
                        text.push_str(&format!(
                            "- {}... _{}_\n",
                            truncate_chars(&hit.chunk.content, RELATED_PREVIEW_CHARS),
                            hit.chunk.module
                        ));
                    }
                }
                text.push_str("\nWould you like me to elaborate on any specific aspect?");
                text
            }
            None => self.fallback(course_id),
        };

        let sources = hits
            .iter()
            .map(|hit| SourceDocument {
                module: hit.chunk.module.clone(),
                timestamp: hit.chunk.timestamp.clone(),
                content_type: "text".to_string(),
                relevance_score: hit.score as f64 / 10.0,
            })
            .collect();

        ChatResponse {
            message: text,
            sources,
            course_id: course_id.to_string(),
        }
    }

    fn fallback(&self, course_id: &str) -> String {
        let topics = self
            .topic_summaries
            .get(course_id)
            .map(String::as_str)
            .unwrap_or("the topics covered in this course");

        format!(
            "I don't have specific information about that in my knowledge base for this course.\n\n\
             Here's what I can help you with:\n- {}\n\n\
             Could you rephrase your question or ask about a specific topic from the course?",
            topics
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &str, content: &str, module: &str, topic: &str) -> KnowledgeChunk {
        KnowledgeChunk {
            chunk_id: id.to_string(),
            content: content.to_string(),
            module: module.to_string(),
            timestamp: "0:00".to_string(),
            topic: topic.to_string(),
        }
    }

    fn bot() -> CourseChatbot {
        let mut kb = HashMap::new();
        kb.insert(
            "search-fundamentals".to_string(),
            vec![
                chunk("s1", "Sitecore Search provides faceted filtering.", "Module 1", "introduction"),
                chunk("s2", "Search indexes store processed content.", "Module 2", "indexing"),
                chunk("s3", "Facets allow users to filter search results.", "Module 4", "facets"),
            ],
        );
        let mut summaries = HashMap::new();
        summaries.insert(
            "search-fundamentals".to_string(),
            "Sitecore Search topics including indexing".to_string(),
        );
        CourseChatbot::new(kb, summaries)
    }

    #[test]
    fn test_search_scores_content_and_topic() {
        let bot = bot();
        let hits = bot.search("search-fundamentals", "Facets", 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].chunk.chunk_id, "s3");
        assert_eq!(hits[0].score, 5);

        let expected = chunk("s3", "Facets allow users to filter search results.", "Module 4", "facets");
        assert_eq!(hits[0], ScoredChunk { chunk: &expected, score: 5 });
    }

    #[test]
    fn test_search_orders_by_score_and_limits() {
        let bot = bot();
        // "search" hits every content (+2); "indexing" only the s2 topic (+3).
        let hits = bot.search("search-fundamentals", "search indexing", 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk.chunk_id, "s2");
        assert_eq!(hits[0].score, 2 + 3);
        assert_eq!(hits[1].chunk.chunk_id, "s1");
    }

    #[test]
    fn test_search_unknown_course() {
        assert!(bot().search("nope", "search", 3).is_empty());
    }

    #[test]
    fn test_respond_cites_sources() {
        let resp = bot().respond("search-fundamentals", "facets", 3);
        assert_eq!(resp.course_id, "search-fundamentals");
        assert!(resp.message.contains("Facets allow users"));
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].module, "Module 4");
        assert_eq!(resp.sources[0].relevance_score, 0.5);
    }

    #[test]
    fn test_respond_fallback() {
        let resp = bot().respond("search-fundamentals", "quantum", 3);
        assert!(resp.sources.is_empty());
        assert!(resp.message.contains("Sitecore Search topics including indexing"));

        let generic = bot().respond("unknown", "anything", 3);
        assert!(generic.message.contains("the topics covered in this course"));
    }
}
