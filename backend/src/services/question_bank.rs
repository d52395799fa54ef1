// src/services/question_bank.rs

use std::collections::HashMap;

use crate::models::question::{AnswerSubmission, AnswerValidation, Question, QuizDefinition};

/// Per-course quiz definitions, loaded once from the catalog and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    quizzes: HashMap<String, QuizDefinition>,
}

impl QuestionBank {
    pub fn new(quizzes: HashMap<String, QuizDefinition>) -> Self {
        Self { quizzes }
    }

    /// Ordered questions of a course. Unknown courses yield an empty slice;
    /// callers decide whether that means "quiz not found".
    pub fn get_questions(&self, course_id: &str) -> &[Question] {
        self.quizzes
            .get(course_id)
            .map(|q| q.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn title(&self, course_id: &str) -> Option<&str> {
        self.quizzes.get(course_id).map(|q| q.title.as_str())
    }

    pub fn questions_by_topic(&self, course_id: &str, topic: &str) -> Vec<&Question> {
        self.get_questions(course_id)
            .iter()
            .filter(|q| q.topic == topic)
            .collect()
    }

    /// Unique topics in first-seen order.
    pub fn topics(&self, course_id: &str) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for q in self.get_questions(course_id) {
            if !topics.contains(&q.topic.as_str()) {
                topics.push(&q.topic);
            }
        }
        topics
    }

    pub fn question_count(&self, course_id: &str) -> usize {
        self.get_questions(course_id).len()
    }

    /// Reports which questions of the course have no submitted answer.
    /// Answers for ids outside the bank still count towards `answered`.
    pub fn validate_answers(&self, course_id: &str, answers: &AnswerSubmission) -> AnswerValidation {
        let questions = self.get_questions(course_id);
        let missing_questions: Vec<String> = questions
            .iter()
            .filter(|q| !answers.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect();

        AnswerValidation {
            valid: missing_questions.is_empty(),
            total_questions: questions.len(),
            answered: answers.len(),
            missing_questions,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::question::Difficulty;

    pub(crate) fn question(id: &str, correct_index: i64, topic: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("Prompt for {}", id),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_index,
            topic: topic.to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    fn bank() -> QuestionBank {
        let mut quizzes = HashMap::new();
        quizzes.insert(
            "xm-cloud-101".to_string(),
            QuizDefinition {
                title: "XM Cloud Quiz".to_string(),
                questions: vec![
                    question("q1", 1, "architecture"),
                    question("q2", 2, "development"),
                    question("q3", 1, "architecture"),
                    question("q4", 0, "deployment"),
                ],
            },
        );
        QuestionBank::new(quizzes)
    }

    #[test]
    fn test_unknown_course_is_empty() {
        let bank = bank();
        assert!(bank.get_questions("nope").is_empty());
        assert_eq!(bank.question_count("nope"), 0);
        assert!(bank.title("nope").is_none());
    }

    #[test]
    fn test_questions_keep_order() {
        let bank = bank();
        let ids: Vec<&str> = bank
            .get_questions("xm-cloud-101")
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn test_topics_first_seen_order() {
        assert_eq!(
            bank().topics("xm-cloud-101"),
            vec!["architecture", "development", "deployment"]
        );
    }

    #[test]
    fn test_questions_by_topic() {
        let bank = bank();
        let arch = bank.questions_by_topic("xm-cloud-101", "architecture");
        assert_eq!(arch.len(), 2);
        assert!(arch.iter().all(|q| q.topic == "architecture"));
    }

    #[test]
    fn test_validate_answers_reports_missing() {
        let bank = bank();
        let mut answers = AnswerSubmission::new();
        answers.insert("q1".into(), 1);
        answers.insert("q3".into(), 0);

        let v = bank.validate_answers("xm-cloud-101", &answers);
        assert!(!v.valid);
        assert_eq!(v.total_questions, 4);
        assert_eq!(v.answered, 2);
        assert_eq!(v.missing_questions, vec!["q2", "q4"]);
    }

    #[test]
    fn test_validate_answers_complete() {
        let bank = bank();
        let answers: AnswerSubmission = ["q1", "q2", "q3", "q4"]
            .iter()
            .map(|id| (id.to_string(), 0))
            .collect();
        assert!(bank.validate_answers("xm-cloud-101", &answers).valid);
    }
}
