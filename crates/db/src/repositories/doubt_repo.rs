//! Repository for the `doubts` table.

use smarttutor_core::pagination::PageWindow;
use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat::{Doubt, DoubtHistory};

const COLUMNS: &str = "id, user_id, question, answer, session_id, lesson_id, course_id, created_at";

/// Provides ownership-scoped operations for doubts.
pub struct DoubtRepo;

impl DoubtRepo {
    /// Persist a question/answer pair for a user, returning the row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        question: &str,
        answer: &str,
        session_id: Option<DbId>,
        lesson_id: Option<DbId>,
        course_id: Option<DbId>,
    ) -> Result<Doubt, sqlx::Error> {
        let query = format!(
            "INSERT INTO doubts (user_id, question, answer, session_id, lesson_id, course_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(user_id)
            .bind(question)
            .bind(answer)
            .bind(session_id)
            .bind(lesson_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Paginated history of a user's doubts, newest first, optionally
    /// filtered by session. `has_more` is defined against the window's
    /// slice end, not the returned row count.
    pub async fn history(
        pool: &PgPool,
        user_id: DbId,
        window: PageWindow,
        session_id: Option<DbId>,
    ) -> Result<DoubtHistory, sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM doubts
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR session_id = $2)",
        )
        .bind(user_id)
        .bind(session_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM doubts
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR session_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        let results = sqlx::query_as::<_, Doubt>(&query)
            .bind(user_id)
            .bind(session_id)
            .bind(window.page_size)
            .bind(window.offset())
            .fetch_all(pool)
            .await?;

        Ok(DoubtHistory {
            results,
            page: window.page,
            page_size: window.page_size,
            total,
            has_more: window.has_more(total),
        })
    }

    /// Delete a doubt owned by a specific user. Returns true if a row was
    /// removed; someone else's doubt id removes nothing.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doubts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every doubt owned by a user, returning the count removed.
    pub async fn clear_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doubts WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Find a doubt by id regardless of owner. Used by tests.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Doubt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doubts WHERE id = $1");
        sqlx::query_as::<_, Doubt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
