//! Course model.
//!
//! A course is the single organizing unit of content: lessons,
//! enrollments, doubts, and chat sessions all hang off `courses`.

use serde::{Deserialize, Serialize};
use smarttutor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::lesson::Lesson;

/// A row from the `courses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of `easy`, `medium`, `hard`. Defaults to `easy`.
    pub difficulty: Option<String>,
}

/// Course detail payload: the course plus its ordered lessons.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub lessons: Vec<Lesson>,
}
