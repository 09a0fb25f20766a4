//! Repository for the `enrollments` table.

use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{EnrolledCourse, Enrollment};

const COLUMNS: &str = "id, user_id, course_id, created_at";

/// Provides enrollment operations. Enrollment is an idempotent
/// get-or-create backed by the `uq_enrollments_user_course` constraint.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course, or return the existing row unchanged.
    ///
    /// `ON CONFLICT DO NOTHING` followed by a plain select keeps the
    /// operation race-free under concurrent requests: whichever request
    /// loses the insert still reads the winner's row.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let insert = format!(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, course_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        if let Some(row) = sqlx::query_as::<_, Enrollment>(&insert)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await?
        {
            return Ok(row);
        }

        let select =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&select)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user's enrollment in a course.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List the courses a user is enrolled in, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EnrolledCourse>, sqlx::Error> {
        sqlx::query_as::<_, EnrolledCourse>(
            "SELECT e.course_id, c.title, c.difficulty, e.created_at AS enrolled_at
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             WHERE e.user_id = $1
             ORDER BY e.created_at DESC, e.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Count enrollments for a (user, course) pair. Used by tests to
    /// assert idempotence.
    pub async fn count(pool: &PgPool, user_id: DbId, course_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM enrollments WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
    }
}
