// src/services/recommender.rs

use std::collections::HashMap;

use crate::{
    models::{
        course::Course,
        quiz_result::TopicScore,
        recommendation::{
            Badge, NextSteps, PathSuggestion, Priority, ProgressStatus, Recommendation,
            RecommendationResource,
        },
    },
    utils::text::title_case,
};

/// Static (course, topic) -> study resource lookup.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    by_course: HashMap<String, HashMap<String, RecommendationResource>>,
}

impl ResourceTable {
    pub fn new(by_course: HashMap<String, HashMap<String, RecommendationResource>>) -> Self {
        Self { by_course }
    }

    /// Resource for a topic, synthesized from the topic name when the table has none.
    pub fn lookup(&self, course_id: &str, topic: &str) -> RecommendationResource {
        self.by_course
            .get(course_id)
            .and_then(|topics| topics.get(topic))
            .cloned()
            .unwrap_or_else(|| default_resource(topic))
    }
}

/// Generic resource for topics missing from the table.
pub fn default_resource(topic: &str) -> RecommendationResource {
    let title = title_case(topic);
    let lower = title.to_lowercase();
    RecommendationResource {
        module_label: format!("Review {} section", title),
        artifact_type: "summary".to_string(),
        tip_text: format!("Focus on {} concepts", lower),
        resources: vec![
            format!("Review {} materials", lower),
            "Practice with examples".to_string(),
            "Take notes on key concepts".to_string(),
        ],
    }
}

/// Builds remedial recommendations for every topic strictly below `threshold`.
///
/// Ordered worst tier first, then by ascending percentage. The sort is stable,
/// so equal entries keep the order of `topic_scores`.
pub fn recommend(
    resources: &ResourceTable,
    course_id: &str,
    topic_scores: &[TopicScore],
    threshold: f64,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = topic_scores
        .iter()
        .filter(|t| t.percentage < threshold)
        .map(|t| {
            let resource = resources.lookup(course_id, &t.topic);
            Recommendation {
                topic: t.topic.clone(),
                score: t.percentage,
                priority: Priority::from_score(t.percentage),
                module_label: resource.module_label,
                artifact_type: resource.artifact_type,
                tip_text: resource.tip_text,
                resources: resource.resources,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then(a.score.total_cmp(&b.score))
    });

    recommendations
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Overall guidance for a finished attempt.
pub fn next_steps(percentage: f64, passed: bool) -> NextSteps {
    if passed && percentage >= 90.0 {
        NextSteps {
            status: ProgressStatus::Excellent,
            message: "Excellent work! You've mastered this course!".to_string(),
            next_steps: steps(&[
                "Consider taking an advanced course",
                "Help others learn by sharing your knowledge",
                "Apply your skills in a real project",
            ]),
            badge: Some(Badge::Gold),
        }
    } else if passed {
        NextSteps {
            status: ProgressStatus::Passed,
            message: "Great job! You've passed the course!".to_string(),
            next_steps: steps(&[
                "Review the recommended topics to strengthen weak areas",
                "Try the practical exercises",
                "Move on to the next course in the learning path",
            ]),
            badge: Some(Badge::Silver),
        }
    } else if percentage >= 50.0 {
        NextSteps {
            status: ProgressStatus::Almost,
            message: "Almost there! A little more study and you'll pass!".to_string(),
            next_steps: steps(&[
                "Focus on the high-priority topics below",
                "Review the course materials",
                "Retake the quiz when ready",
            ]),
            badge: None,
        }
    } else {
        NextSteps {
            status: ProgressStatus::NeedsWork,
            message: "Keep learning! Review the materials and try again.".to_string(),
            next_steps: steps(&[
                "Start with the fundamentals",
                "Watch all course videos",
                "Take notes and use the artifacts",
                "Practice with the chatbot",
            ]),
            badge: None,
        }
    }
}

/// Courses not yet completed whose prerequisites are all completed, in catalog order.
pub fn learning_path(courses: &[Course], completed: &[String]) -> Vec<PathSuggestion> {
    courses
        .iter()
        .filter(|c| !completed.contains(&c.course_id))
        .filter(|c| c.prerequisites.iter().all(|p| completed.contains(p)))
        .map(|c| PathSuggestion {
            course_id: c.course_id.clone(),
            title: c.title.clone(),
            reason: if c.prerequisites.is_empty() {
                "Great starting point".to_string()
            } else {
                "Prerequisites completed".to_string()
            },
            recommended: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(name: &str, percentage: f64) -> TopicScore {
        TopicScore {
            topic: name.to_string(),
            correct: 0,
            total: 1,
            percentage,
        }
    }

    fn table() -> ResourceTable {
        let mut topics = HashMap::new();
        topics.insert(
            "development".to_string(),
            RecommendationResource {
                module_label: "Module 4: Component Development".to_string(),
                artifact_type: "cheatsheet".to_string(),
                tip_text: "Practice creating components with the JSS SDK".to_string(),
                resources: vec!["Build a sample component".to_string()],
            },
        );
        let mut by_course = HashMap::new();
        by_course.insert("xm-cloud-101".to_string(), topics);
        ResourceTable::new(by_course)
    }

    #[test]
    fn test_priority_tiers_and_order() {
        let scores = vec![
            topic("a", 85.0),
            topic("b", 30.0),
            topic("c", 55.0),
            topic("d", 65.0),
        ];
        let recs = recommend(&table(), "xm-cloud-101", &scores, 70.0);

        let got: Vec<(&str, Priority)> = recs.iter().map(|r| (r.topic.as_str(), r.priority)).collect();
        assert_eq!(
            got,
            vec![
                ("b", Priority::High),
                ("c", Priority::Medium),
                ("d", Priority::Low),
            ]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let scores = vec![topic("at", 70.0), topic("below", 69.9)];
        let recs = recommend(&table(), "xm-cloud-101", &scores, 70.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].topic, "below");
    }

    #[test]
    fn test_perfect_scores_yield_nothing() {
        let scores = vec![topic("a", 100.0), topic("b", 100.0)];
        assert!(recommend(&table(), "xm-cloud-101", &scores, 70.0).is_empty());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Priority::from_score(0.0), Priority::High);
        assert_eq!(Priority::from_score(39.99), Priority::High);
        assert_eq!(Priority::from_score(40.0), Priority::Medium);
        assert_eq!(Priority::from_score(59.99), Priority::Medium);
        assert_eq!(Priority::from_score(60.0), Priority::Low);
    }

    #[test]
    fn test_secondary_sort_and_stability() {
        let scores = vec![
            topic("x", 35.0),
            topic("y", 10.0),
            topic("z", 35.0),
        ];
        let recs = recommend(&table(), "xm-cloud-101", &scores, 70.0);
        let order: Vec<&str> = recs.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(order, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_custom_threshold() {
        let scores = vec![topic("a", 75.0), topic("b", 85.0)];
        let recs = recommend(&table(), "xm-cloud-101", &scores, 80.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Low);
    }

    #[test]
    fn test_known_topic_uses_table() {
        let recs = recommend(&table(), "xm-cloud-101", &[topic("development", 33.3)], 70.0);
        assert_eq!(recs[0].module_label, "Module 4: Component Development");
        assert_eq!(recs[0].artifact_type, "cheatsheet");
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[test]
    fn test_unknown_topic_falls_back() {
        let recs = recommend(&table(), "unknown-course", &[topic("content_ops", 50.0)], 70.0);
        assert_eq!(recs[0].module_label, "Review Content Ops section");
        assert_eq!(recs[0].artifact_type, "summary");
        assert_eq!(recs[0].tip_text, "Focus on content ops concepts");
        assert_eq!(recs[0].resources[0], "Review content ops materials");
    }

    #[test]
    fn test_next_steps_statuses() {
        assert_eq!(next_steps(95.0, true).status, ProgressStatus::Excellent);
        assert_eq!(next_steps(95.0, true).badge, Some(Badge::Gold));
        assert_eq!(next_steps(80.0, true).status, ProgressStatus::Passed);
        assert_eq!(next_steps(80.0, true).badge, Some(Badge::Silver));
        assert_eq!(next_steps(60.0, false).status, ProgressStatus::Almost);
        assert_eq!(next_steps(20.0, false).status, ProgressStatus::NeedsWork);
        assert!(next_steps(20.0, false).badge.is_none());
    }

    fn course(id: &str, prereqs: &[&str]) -> Course {
        Course {
            course_id: id.to_string(),
            title: format!("{} title", id),
            description: String::new(),
            difficulty: "beginner".to_string(),
            duration: "1 hour".to_string(),
            topics: vec![],
            prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
            modules: vec![],
        }
    }

    #[test]
    fn test_learning_path_respects_prerequisites() {
        let courses = vec![
            course("xm-cloud-101", &[]),
            course("search-fundamentals", &["xm-cloud-101"]),
            course("content-hub-101", &[]),
        ];

        let fresh = learning_path(&courses, &[]);
        let ids: Vec<&str> = fresh.iter().map(|s| s.course_id.as_str()).collect();
        assert_eq!(ids, vec!["xm-cloud-101", "content-hub-101"]);
        assert_eq!(fresh[0].reason, "Great starting point");

        let after = learning_path(&courses, &["xm-cloud-101".to_string()]);
        let ids: Vec<&str> = after.iter().map(|s| s.course_id.as_str()).collect();
        assert_eq!(ids, vec!["search-fundamentals", "content-hub-101"]);
        assert_eq!(after[0].reason, "Prerequisites completed");
    }
}
