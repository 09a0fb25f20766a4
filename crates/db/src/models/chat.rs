//! Chat session and doubt models.

use serde::{Deserialize, Serialize};
use smarttutor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `chat_sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatSession {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub course_id: Option<DbId>,
    pub lesson_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a chat session, optionally scoped to a course or lesson.
#[derive(Debug, Deserialize)]
pub struct CreateChatSession {
    #[serde(default)]
    pub title: String,
    pub course: Option<DbId>,
    pub lesson: Option<DbId>,
}

/// A row from the `doubts` table: one student question plus its answer.
///
/// `answer` is nullable in the schema (a doubt exists before the AI
/// responds) though the ask flow persists question and answer together.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Doubt {
    pub id: DbId,
    pub user_id: DbId,
    pub question: String,
    pub answer: Option<String>,
    pub session_id: Option<DbId>,
    pub lesson_id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Request body for asking a doubt.
#[derive(Debug, Deserialize)]
pub struct AskDoubt {
    pub question: String,
    pub session: Option<DbId>,
    pub course: Option<DbId>,
    pub lesson: Option<DbId>,
}

/// Paginated doubt history payload.
#[derive(Debug, Serialize)]
pub struct DoubtHistory {
    pub results: Vec<Doubt>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub has_more: bool,
}
