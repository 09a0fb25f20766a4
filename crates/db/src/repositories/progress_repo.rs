//! Repository for the `lesson_progress` table.

use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{CourseLessonProgress, LessonProgress};

const COLUMNS: &str = "id, user_id, lesson_id, completed, score, updated_at";

/// Provides upsert-based progress tracking per (user, lesson).
pub struct ProgressRepo;

impl ProgressRepo {
    /// Record a quiz result for a lesson.
    ///
    /// Upserts on the (user, lesson) unique constraint so racing requests
    /// never create duplicate rows. `completed` is sticky: once true it is
    /// never reset by a later, lower-scoring attempt.
    pub async fn record_score(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
        score: f64,
        completed: bool,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (user_id, lesson_id, completed, score)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, lesson_id) DO UPDATE SET
                 score = EXCLUDED.score,
                 completed = lesson_progress.completed OR EXCLUDED.completed,
                 updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .bind(completed)
            .bind(score)
            .fetch_one(pool)
            .await
    }

    /// Mark a lesson complete without touching the score (manual
    /// completion from the course progress endpoint).
    pub async fn mark_complete(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (user_id, lesson_id, completed)
             VALUES ($1, $2, TRUE)
             ON CONFLICT (user_id, lesson_id) DO UPDATE SET
                 completed = TRUE,
                 updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user's progress row for a lesson.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2");
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Per-lesson progress for every lesson of a course, in lesson order.
    /// Lessons without a progress row appear as not completed, score 0.
    pub async fn list_for_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<CourseLessonProgress>, sqlx::Error> {
        sqlx::query_as::<_, CourseLessonProgress>(
            "SELECT l.id AS lesson_id, l.title,
                    COALESCE(p.completed, FALSE) AS completed,
                    COALESCE(p.score, 0.0) AS score
             FROM lessons l
             LEFT JOIN lesson_progress p
                    ON p.lesson_id = l.id AND p.user_id = $1
             WHERE l.course_id = $2
             ORDER BY l.position ASC, l.id ASC",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
    }

    /// Count progress rows for a (user, lesson) pair. Used by tests to
    /// assert upsert semantics.
    pub async fn count(pool: &PgPool, user_id: DbId, lesson_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2",
        )
        .bind(user_id)
        .bind(lesson_id)
        .fetch_one(pool)
        .await
    }
}
