//! Repository for quizzes, questions, and answers.

use smarttutor_core::grading::{AnswerKey, QuestionKey};
use smarttutor_core::types::DbId;
use sqlx::PgPool;

use crate::models::quiz::{
    Answer, CreateQuiz, Question, QuestionWithAnswers, Quiz, QuizDetail,
};

const QUIZ_COLUMNS: &str = "id, created_by, title, topic, lesson_id, created_at";
const QUESTION_COLUMNS: &str = "id, quiz_id, text, position";
const ANSWER_COLUMNS: &str = "id, question_id, text, is_correct, explanation";

/// Provides CRUD and grading-key operations for quizzes.
pub struct QuizRepo;

impl QuizRepo {
    /// Create a quiz with its nested questions and answers in one
    /// transaction. Question order follows the input order.
    ///
    /// The one-correct-answer invariant is validated in the handler before
    /// this is called; the insert itself does not re-check it.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateQuiz,
    ) -> Result<Quiz, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let quiz_query = format!(
            "INSERT INTO quizzes (created_by, title, topic, lesson_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {QUIZ_COLUMNS}"
        );
        let quiz = sqlx::query_as::<_, Quiz>(&quiz_query)
            .bind(created_by)
            .bind(&input.title)
            .bind(&input.topic)
            .bind(input.lesson_id)
            .fetch_one(&mut *tx)
            .await?;

        for (position, question) in input.questions.iter().enumerate() {
            let question_id: DbId = sqlx::query_scalar(
                "INSERT INTO questions (quiz_id, text, position)
                 VALUES ($1, $2, $3)
                 RETURNING id",
            )
            .bind(quiz.id)
            .bind(&question.text)
            .bind(position as i32)
            .fetch_one(&mut *tx)
            .await?;

            for answer in &question.answers {
                sqlx::query(
                    "INSERT INTO answers (question_id, text, is_correct, explanation)
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(question_id)
                .bind(&answer.text)
                .bind(answer.is_correct)
                .bind(&answer.explanation)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(quiz)
    }

    /// Find a quiz by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {QUIZ_COLUMNS} FROM quizzes WHERE id = $1");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all quizzes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!("SELECT {QUIZ_COLUMNS} FROM quizzes ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Quiz>(&query).fetch_all(pool).await
    }

    /// Load a quiz with its ordered questions and answers.
    pub async fn detail(pool: &PgPool, id: DbId) -> Result<Option<QuizDetail>, sqlx::Error> {
        let Some(quiz) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let question_query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions
             WHERE quiz_id = $1 ORDER BY position ASC, id ASC"
        );
        let questions = sqlx::query_as::<_, Question>(&question_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        let mut detail = Vec::with_capacity(questions.len());
        for question in questions {
            let answer_query = format!(
                "SELECT {ANSWER_COLUMNS} FROM answers WHERE question_id = $1 ORDER BY id ASC"
            );
            let answers = sqlx::query_as::<_, Answer>(&answer_query)
                .bind(question.id)
                .fetch_all(pool)
                .await?;
            detail.push(QuestionWithAnswers { question, answers });
        }

        Ok(Some(QuizDetail {
            quiz,
            questions: detail,
        }))
    }

    /// Load the grading key for a quiz: every question with its answers'
    /// correctness flags, in question order.
    pub async fn answer_key(pool: &PgPool, quiz_id: DbId) -> Result<Vec<QuestionKey>, sqlx::Error> {
        let rows: Vec<(DbId, DbId, bool)> = sqlx::query_as(
            "SELECT q.id, a.id, a.is_correct
             FROM questions q
             JOIN answers a ON a.question_id = q.id
             WHERE q.quiz_id = $1
             ORDER BY q.position ASC, q.id ASC, a.id ASC",
        )
        .bind(quiz_id)
        .fetch_all(pool)
        .await?;

        let mut key: Vec<QuestionKey> = Vec::new();
        for (question_id, answer_id, is_correct) in rows {
            match key.last_mut() {
                Some(last) if last.id == question_id => last.answers.push(AnswerKey {
                    id: answer_id,
                    is_correct,
                }),
                _ => key.push(QuestionKey {
                    id: question_id,
                    answers: vec![AnswerKey {
                        id: answer_id,
                        is_correct,
                    }],
                }),
            }
        }

        // Questions without any answers still count toward the total.
        let orphans: Vec<DbId> = sqlx::query_scalar(
            "SELECT q.id FROM questions q
             LEFT JOIN answers a ON a.question_id = q.id
             WHERE q.quiz_id = $1 AND a.id IS NULL
             ORDER BY q.position ASC, q.id ASC",
        )
        .bind(quiz_id)
        .fetch_all(pool)
        .await?;
        for id in orphans {
            key.push(QuestionKey {
                id,
                answers: Vec::new(),
            });
        }

        Ok(key)
    }

    /// Delete a quiz owned by a specific user. Returns true if a row was
    /// removed.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
