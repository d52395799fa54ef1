// src/services/repository.rs

use async_trait::async_trait;
use sqlx::{SqlitePool, types::Json};

use crate::models::{
    note::Note,
    quiz_result::{QuestionResult, QuizResultRecord, TopicScore},
    recommendation::Recommendation,
};

/// Storage for per-(user, course) notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn get(&self, user_id: &str, course_id: &str) -> Result<Option<Note>, sqlx::Error>;

    /// Inserts or replaces the note; `created_at` of an existing note is kept.
    async fn put(&self, note: &Note) -> Result<Note, sqlx::Error>;

    /// Returns whether a note existed.
    async fn delete(&self, user_id: &str, course_id: &str) -> Result<bool, sqlx::Error>;

    /// All notes of a user, ordered by course id.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Note>, sqlx::Error>;
}

/// Storage for the latest quiz result per (user, course).
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn get(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<QuizResultRecord>, sqlx::Error>;

    /// Upsert: a retake replaces the previous attempt.
    async fn put(&self, record: &QuizResultRecord) -> Result<(), sqlx::Error>;

    async fn delete(&self, user_id: &str, course_id: &str) -> Result<bool, sqlx::Error>;

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuizResultRecord>, sqlx::Error>;
}

/// SQLite-backed implementation of both repositories.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape of the 'quiz_results' table.
#[derive(sqlx::FromRow)]
struct QuizResultRow {
    user_id: String,
    course_id: String,
    score: i64,
    total: i64,
    percentage: f64,
    passed: bool,
    topic_scores: Json<Vec<TopicScore>>,
    question_results: Json<Vec<QuestionResult>>,
    recommendations: Json<Vec<Recommendation>>,
    submitted_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuizResultRow> for QuizResultRecord {
    fn from(row: QuizResultRow) -> Self {
        Self {
            user_id: row.user_id,
            course_id: row.course_id,
            score: row.score as u32,
            total: row.total as u32,
            percentage: row.percentage,
            passed: row.passed,
            topic_scores: row.topic_scores.0,
            question_results: row.question_results.0,
            recommendations: row.recommendations.0,
            submitted_at: row.submitted_at,
        }
    }
}

const SELECT_RESULT: &str = r#"
    SELECT user_id, course_id, score, total, percentage, passed,
           topic_scores, question_results, recommendations, submitted_at
    FROM quiz_results
"#;

#[async_trait]
impl NoteRepository for SqliteStore {
    async fn get(&self, user_id: &str, course_id: &str) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT user_id, course_id, content, created_at, updated_at
            FROM notes
            WHERE user_id = ? AND course_id = ?
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn put(&self, note: &Note) -> Result<Note, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, course_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id, course_id) DO UPDATE SET
                content = excluded.content,
                updated_at = excluded.updated_at
            RETURNING user_id, course_id, content, created_at, updated_at
            "#,
        )
        .bind(&note.user_id)
        .bind(&note.course_id)
        .bind(&note.content)
        .bind(note.created_at)
        .bind(note.updated_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete(&self, user_id: &str, course_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE user_id = ? AND course_id = ?")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT user_id, course_id, content, created_at, updated_at
            FROM notes
            WHERE user_id = ?
            ORDER BY course_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[async_trait]
impl ResultRepository for SqliteStore {
    async fn get(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<QuizResultRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, QuizResultRow>(&format!(
            "{} WHERE user_id = ? AND course_id = ?",
            SELECT_RESULT
        ))
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuizResultRecord::from))
    }

    async fn put(&self, record: &QuizResultRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO quiz_results
                (user_id, course_id, score, total, percentage, passed,
                 topic_scores, question_results, recommendations, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id, course_id) DO UPDATE SET
                score = excluded.score,
                total = excluded.total,
                percentage = excluded.percentage,
                passed = excluded.passed,
                topic_scores = excluded.topic_scores,
                question_results = excluded.question_results,
                recommendations = excluded.recommendations,
                submitted_at = excluded.submitted_at
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.course_id)
        .bind(record.score as i64)
        .bind(record.total as i64)
        .bind(record.percentage)
        .bind(record.passed)
        .bind(Json(&record.topic_scores))
        .bind(Json(&record.question_results))
        .bind(Json(&record.recommendations))
        .bind(record.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, course_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quiz_results WHERE user_id = ? AND course_id = ?")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuizResultRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, QuizResultRow>(&format!(
            "{} WHERE user_id = ? ORDER BY course_id",
            SELECT_RESULT
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuizResultRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::Priority;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> SqliteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        SqliteStore::new(pool)
    }

    fn note(user: &str, course: &str, content: &str) -> Note {
        let now = chrono::Utc::now();
        Note {
            user_id: user.into(),
            course_id: course.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn record(user: &str, course: &str, score: u32) -> QuizResultRecord {
        QuizResultRecord {
            user_id: user.into(),
            course_id: course.into(),
            score,
            total: 5,
            percentage: score as f64 * 20.0,
            passed: score >= 4,
            topic_scores: vec![TopicScore {
                topic: "dam".into(),
                correct: score,
                total: 5,
                percentage: score as f64 * 20.0,
            }],
            question_results: vec![],
            recommendations: vec![Recommendation {
                topic: "dam".into(),
                score: 20.0,
                priority: Priority::High,
                module_label: "Module 2: Asset Management".into(),
                artifact_type: "mindmap".into(),
                tip_text: "Explore different asset types and metadata".into(),
                resources: vec![],
            }],
            submitted_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_note_upsert_keeps_created_at() {
        let store = store().await;
        let first = NoteRepository::put(&store, &note("u1", "c1", "first")).await.unwrap();

        let mut second = note("u1", "c1", "second draft");
        second.created_at = first.created_at + chrono::Duration::hours(1);
        let saved = NoteRepository::put(&store, &second).await.unwrap();

        assert_eq!(saved.content, "second draft");
        assert_eq!(saved.created_at, first.created_at);

        let fetched = NoteRepository::get(&store, "u1", "c1").await.unwrap().unwrap();
        assert_eq!(fetched.content, "second draft");
    }

    #[tokio::test]
    async fn test_note_delete_and_list() {
        let store = store().await;
        NoteRepository::put(&store, &note("u1", "c2", "b")).await.unwrap();
        NoteRepository::put(&store, &note("u1", "c1", "a")).await.unwrap();
        NoteRepository::put(&store, &note("u2", "c1", "other user")).await.unwrap();

        let listed = NoteRepository::list_for_user(&store, "u1").await.unwrap();
        let courses: Vec<&str> = listed.iter().map(|n| n.course_id.as_str()).collect();
        assert_eq!(courses, vec!["c1", "c2"]);

        assert!(NoteRepository::delete(&store, "u1", "c1").await.unwrap());
        assert!(!NoteRepository::delete(&store, "u1", "c1").await.unwrap());
        assert!(NoteRepository::get(&store, "u1", "c1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_result_roundtrip_and_retake() {
        let store = store().await;
        ResultRepository::put(&store, &record("u1", "content-hub-101", 1)).await.unwrap();
        ResultRepository::put(&store, &record("u1", "content-hub-101", 5)).await.unwrap();

        let stored = ResultRepository::get(&store, "u1", "content-hub-101")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.score, 5);
        assert!(stored.passed);
        assert_eq!(stored.topic_scores[0].topic, "dam");
        assert_eq!(stored.recommendations[0].priority, Priority::High);

        assert_eq!(ResultRepository::list_for_user(&store, "u1").await.unwrap().len(), 1);
        assert!(ResultRepository::get(&store, "u2", "content-hub-101").await.unwrap().is_none());

        assert!(ResultRepository::delete(&store, "u1", "content-hub-101").await.unwrap());
        assert!(!ResultRepository::delete(&store, "u1", "content-hub-101").await.unwrap());
        assert!(ResultRepository::get(&store, "u1", "content-hub-101")
            .await
            .unwrap()
            .is_none());
        assert!(ResultRepository::list_for_user(&store, "u1").await.unwrap().is_empty());
    }
}
