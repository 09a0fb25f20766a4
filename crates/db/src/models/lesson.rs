//! Lesson model.

use serde::{Deserialize, Serialize};
use smarttutor_core::types::DbId;
use sqlx::FromRow;

/// A row from the `lessons` table. Display order is `position`, ties
/// broken by insertion (id).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub content: String,
    pub position: i32,
}

/// DTO for creating a lesson within a course.
#[derive(Debug, Deserialize)]
pub struct CreateLesson {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub position: i32,
}
