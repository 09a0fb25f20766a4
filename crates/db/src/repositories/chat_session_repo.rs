//! Repository for the `chat_sessions` table.

use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat::{ChatSession, CreateChatSession};

const COLUMNS: &str = "id, user_id, title, course_id, lesson_id, created_at";

/// Provides ownership-scoped CRUD for chat sessions.
pub struct ChatSessionRepo;

impl ChatSessionRepo {
    /// Create a session for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateChatSession,
    ) -> Result<ChatSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_sessions (user_id, title, course_id, lesson_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.course)
            .bind(input.lesson)
            .fetch_one(pool)
            .await
    }

    /// Find a session owned by a specific user.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ChatSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chat_sessions WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's sessions, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ChatSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_sessions
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a session owned by a specific user. Doubts in the session
    /// cascade. Returns true if a row was removed.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chat_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
