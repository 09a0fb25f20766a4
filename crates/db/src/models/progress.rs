//! Lesson progress and quiz attempt models.

use serde::{Deserialize, Serialize};
use smarttutor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `lesson_progress` table. Unique per (user, lesson);
/// writes are atomic upserts.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LessonProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub lesson_id: DbId,
    pub completed: bool,
    /// Latest quiz percentage for this lesson, 0-100.
    pub score: f64,
    pub updated_at: Timestamp,
}

/// A row from the `quiz_attempts` table: one recorded grading event.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuizAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub quiz_id: DbId,
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
    pub created_at: Timestamp,
}

/// A row from the `question_responses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuestionResponse {
    pub id: DbId,
    pub attempt_id: DbId,
    pub question_id: DbId,
    pub selected_answer_id: Option<DbId>,
    pub correct: bool,
}

/// DTO for manually marking a lesson complete.
#[derive(Debug, Deserialize)]
pub struct MarkLessonComplete {
    pub lesson: DbId,
}

/// Per-lesson progress joined with lesson titles, for course progress views.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseLessonProgress {
    pub lesson_id: DbId,
    pub title: String,
    pub completed: bool,
    pub score: f64,
}
