// src/services/discovery.rs

use std::collections::HashMap;

use crate::{
    config::DISCOVERY_MAX_RESULTS,
    models::{
        chat::ChatMessage,
        discovery::{CourseRecommendation, DiscoveryConfig, DiscoveryCourse, DiscoveryResponse},
    },
    utils::text::capitalize,
};

/// Role and interests spotted in a single message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageAnalysis {
    pub detected_role: Option<String>,
    pub detected_interests: Vec<String>,
    pub should_recommend: bool,
}

/// Keyword-matching course discovery agent.
///
/// Stateless: the client echoes the conversation history on every turn.
#[derive(Debug, Clone)]
pub struct DiscoveryAgent {
    config: DiscoveryConfig,
    titles: HashMap<String, String>,
}

impl DiscoveryAgent {
    /// `titles` maps course ids to display titles.
    pub fn new(config: DiscoveryConfig, titles: HashMap<String, String>) -> Self {
        Self { config, titles }
    }

    /// Course profiles in catalog order.
    pub fn courses(&self) -> &[DiscoveryCourse] {
        &self.config.courses
    }

    /// First matching role wins; every matching interest is collected.
    pub fn analyze(&self, message: &str) -> MessageAnalysis {
        let lower = message.to_lowercase();

        let detected_role = self
            .config
            .roles
            .iter()
            .find(|r| r.keywords.iter().any(|kw| lower.contains(kw.as_str())))
            .map(|r| r.role.clone());

        let detected_interests: Vec<String> = self
            .config
            .interests
            .iter()
            .filter(|i| i.keywords.iter().any(|kw| lower.contains(kw.as_str())))
            .map(|i| i.interest.clone())
            .collect();

        let should_recommend = detected_role.is_some() || detected_interests.len() >= 2;

        MessageAnalysis {
            detected_role,
            detected_interests,
            should_recommend,
        }
    }

    /// Scores every course against the learner profile and keeps the best three.
    ///
    /// * +3 when the role is one of the course's target roles.
    /// * +2 for each interest listed among the course keywords.
    /// * +1 for each course keyword found inside the joined interests.
    pub fn match_courses(&self, role: Option<&str>, interests: &[String]) -> Vec<CourseRecommendation> {
        let joined = interests.join(" ").to_lowercase();
        let mut scored = Vec::new();

        for course in &self.config.courses {
            let mut score = 0u32;
            let mut reasons: Vec<String> = Vec::new();

            if let Some(role) = role {
                if course.roles.iter().any(|r| r == role) {
                    score += 3;
                    reasons.push(format!("great for {}s", role));
                }
            }

            for interest in interests {
                if course.keywords.contains(interest) {
                    score += 2;
                    reasons.push(format!("covers {}", interest));
                }
            }

            score += course
                .keywords
                .iter()
                .filter(|kw| joined.contains(kw.as_str()))
                .count() as u32;

            if score == 0 {
                continue;
            }

            let reason = if reasons.is_empty() {
                "recommended based on your profile".to_string()
            } else {
                reasons.iter().take(2).cloned().collect::<Vec<_>>().join(", ")
            };

            scored.push(CourseRecommendation {
                course_id: course.course_id.clone(),
                title: self
                    .titles
                    .get(&course.course_id)
                    .cloned()
                    .unwrap_or_else(|| course.course_id.clone()),
                reason: capitalize(&reason),
                score,
            });
        }

        // Stable: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(DISCOVERY_MAX_RESULTS);
        scored
    }

    /// Handles one conversation turn.
    pub fn process_message(&self, message: &str, history: &[ChatMessage]) -> DiscoveryResponse {
        let turn_count = history.iter().filter(|m| m.is_user()).count();
        let analysis = self.analyze(message);

        let mut role = analysis.detected_role.clone();
        let mut interests: Vec<String> = Vec::new();
        let mut push_unique = |items: Vec<String>| {
            for item in items {
                if !interests.contains(&item) {
                    interests.push(item);
                }
            }
        };

        push_unique(analysis.detected_interests.clone());
        for msg in history.iter().filter(|m| m.is_user()) {
            let past = self.analyze(&msg.content);
            if role.is_none() {
                role = past.detected_role;
            }
            push_unique(past.detected_interests);
        }

        let should_recommend = analysis.should_recommend || turn_count >= 2 || interests.len() >= 2;

        tracing::debug!(
            "Discovery turn {}: role={:?}, interests={:?}, recommend={}",
            turn_count,
            role,
            interests,
            should_recommend
        );

        if should_recommend {
            let recommendations = self.match_courses(role.as_deref(), &interests);
            if !recommendations.is_empty() {
                return DiscoveryResponse {
                    message: recommendation_message(&recommendations, role.as_deref(), &interests),
                    has_recommendations: true,
                    recommended_courses: recommendations,
                    conversation_complete: true,
                };
            }
        }

        DiscoveryResponse {
            message: followup_message(role.as_deref(), &interests),
            has_recommendations: false,
            recommended_courses: Vec::new(),
            conversation_complete: false,
        }
    }
}

fn recommendation_message(
    recommendations: &[CourseRecommendation],
    role: Option<&str>,
    interests: &[String],
) -> String {
    let mut profile = Vec::new();
    if let Some(role) = role {
        profile.push(format!("as a {}", role));
    }
    if !interests.is_empty() {
        profile.push(format!("interested in {}", interests.join(", ")));
    }

    let mut message = if profile.is_empty() {
        "Based on what you've shared, I've found some courses for you!\n\n".to_string()
    } else {
        format!(
            "Based on what you've shared {}, I've found some courses for you!\n\n",
            profile.join(" ")
        )
    };

    message.push_str("**Here are my recommendations:**\n\n");
    for (i, course) in recommendations.iter().enumerate() {
        message.push_str(&format!("**{}. {}**\n   _{}_\n\n", i + 1, course.title, course.reason));
    }
    message.push_str(
        "Select the ones that interest you most to get started, \
         or ask me for more details about any of them.",
    );
    message
}

fn followup_message(role: Option<&str>, interests: &[String]) -> String {
    match role {
        None => "That's helpful! To give you the best recommendations, could you tell me:\n\n\
                 - **Your role**: are you a developer, marketer, content author, or administrator?\n\
                 - **Your experience**: are you new to these products or levelling up?"
            .to_string(),
        Some(role) if interests.is_empty() => format!(
            "Great to know you're a {}!\n\n\
             Which areas interest you most?\n\n\
             - **Architecture & Development**\n\
             - **Search & Discovery**\n\
             - **Content Management**\n\
             - **Performance**",
            role
        ),
        Some(_) => "Thanks for sharing! Let me find the best matches for your learning goals.".to_string(),
    }
}
