//! Enrollment model.

use serde::Serialize;
use smarttutor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `enrollments` table. Unique per (user, course);
/// enrollment is an idempotent get-or-create.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}

/// An enrollment joined with its course title, for listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EnrolledCourse {
    pub course_id: DbId,
    pub title: String,
    pub difficulty: String,
    pub enrolled_at: Timestamp,
}
