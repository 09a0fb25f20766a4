//! Repository for quiz attempts and their per-question responses.

use smarttutor_core::grading::Grade;
use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{QuestionResponse, QuizAttempt};

const ATTEMPT_COLUMNS: &str = "id, user_id, quiz_id, score, total, percentage, created_at";
const RESPONSE_COLUMNS: &str = "id, attempt_id, question_id, selected_answer_id, correct";

/// Records grading events. Each submission appends a new attempt; nothing
/// here is upserted.
pub struct AttemptRepo;

impl AttemptRepo {
    /// Persist a graded submission with its per-question responses in one
    /// transaction, returning the attempt row.
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        quiz_id: DbId,
        grade: &Grade,
    ) -> Result<QuizAttempt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO quiz_attempts (user_id, quiz_id, score, total, percentage)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ATTEMPT_COLUMNS}"
        );
        let attempt = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .bind(grade.summary.score)
            .bind(grade.summary.total)
            .bind(grade.summary.percentage)
            .fetch_one(&mut *tx)
            .await?;

        for outcome in &grade.outcomes {
            sqlx::query(
                "INSERT INTO question_responses
                     (attempt_id, question_id, selected_answer_id, correct)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(attempt.id)
            .bind(outcome.question_id)
            .bind(outcome.selected_answer_id)
            .bind(outcome.correct)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(attempt)
    }

    /// List a user's attempts for a quiz, newest first.
    pub async fn list_for_quiz(
        pool: &PgPool,
        user_id: DbId,
        quiz_id: DbId,
    ) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM quiz_attempts
             WHERE user_id = $1 AND quiz_id = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .fetch_all(pool)
            .await
    }

    /// List the responses recorded for an attempt.
    pub async fn responses(
        pool: &PgPool,
        attempt_id: DbId,
    ) -> Result<Vec<QuestionResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {RESPONSE_COLUMNS} FROM question_responses
             WHERE attempt_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, QuestionResponse>(&query)
            .bind(attempt_id)
            .fetch_all(pool)
            .await
    }
}
