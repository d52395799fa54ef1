// src/services/scorer.rs

use std::fmt;

use crate::{
    config::PASSING_SCORE_PERCENTAGE,
    models::{
        question::{AnswerSubmission, Question},
        quiz_result::{QuestionResult, QuizResult, TopicScore},
    },
    services::question_bank::QuestionBank,
};

/// Answer index recorded for a question the learner skipped.
pub const UNANSWERED: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// No question bank is defined for the course. Carries the course id
    /// when known, otherwise a description.
    NotFound(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NotFound(detail) => write!(f, "Quiz not found: {}", detail),
        }
    }
}

impl std::error::Error for QuizError {}

/// Helper function to calculate a percentage.
/// Returns 0 when there is nothing to divide by.
fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * correct as f64 / total as f64
}

/// Scores a submission against an ordered question list.
///
/// * Unanswered questions count as the `-1` sentinel and are always wrong.
/// * Correctness is exact index equality, no partial credit.
/// * Topic tallies keep the order in which topics first appear.
pub fn score(questions: &[Question], answers: &AnswerSubmission) -> Result<QuizResult, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::NotFound(
            "no quiz defined for this course".to_string(),
        ));
    }

    let mut correct_count: u32 = 0;
    let mut topic_scores: Vec<TopicScore> = Vec::new();
    let mut question_results = Vec::with_capacity(questions.len());

    for question in questions {
        let user_answer = answers.get(&question.id).copied().unwrap_or(UNANSWERED);
        let is_correct = user_answer == question.correct_index;

        if is_correct {
            correct_count += 1;
        }

        // Linear lookup keeps first-seen order; banks hold a handful of topics.
        let existing = topic_scores.iter().position(|t| t.topic == question.topic);
        let idx = match existing {
            Some(idx) => idx,
            None => {
                topic_scores.push(TopicScore {
                    topic: question.topic.clone(),
                    correct: 0,
                    total: 0,
                    percentage: 0.0,
                });
                topic_scores.len() - 1
            }
        };
        let entry = &mut topic_scores[idx];
        entry.total += 1;
        if is_correct {
            entry.correct += 1;
        }

        question_results.push(QuestionResult {
            question_id: question.id.clone(),
            user_answer,
            correct_answer: question.correct_index,
            is_correct,
            topic: question.topic.clone(),
        });
    }

    for topic in &mut topic_scores {
        topic.percentage = percentage(topic.correct, topic.total);
    }

    let total = questions.len() as u32;
    let overall = percentage(correct_count, total);

    Ok(QuizResult {
        score: correct_count,
        total,
        percentage: overall,
        passed: overall >= PASSING_SCORE_PERCENTAGE,
        topic_scores,
        question_results,
    })
}

/// Looks up the course's question bank and scores the submission.
pub fn score_course(
    bank: &QuestionBank,
    course_id: &str,
    answers: &AnswerSubmission,
) -> Result<QuizResult, QuizError> {
    let questions = bank.get_questions(course_id);
    if questions.is_empty() {
        return Err(QuizError::NotFound(course_id.to_string()));
    }
    score(questions, answers)
}
