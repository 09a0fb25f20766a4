//! Quiz, question, and answer models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smarttutor_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `quizzes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Quiz {
    pub id: DbId,
    pub created_by: DbId,
    pub title: String,
    pub topic: String,
    pub lesson_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A row from the `questions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub quiz_id: DbId,
    pub text: String,
    pub position: i32,
}

/// A row from the `answers` table.
///
/// `is_correct` is excluded from serialization so quiz detail responses
/// never leak the answer key to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub text: String,
    #[serde(skip_serializing)]
    pub is_correct: bool,
    pub explanation: String,
}

/// DTO for creating a quiz with nested questions and answers.
#[derive(Debug, Deserialize)]
pub struct CreateQuiz {
    pub title: String,
    #[serde(default)]
    pub topic: String,
    pub lesson_id: Option<DbId>,
    #[serde(default)]
    pub questions: Vec<CreateQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub text: String,
    pub answers: Vec<CreateAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

/// Quiz detail payload: quiz plus ordered questions with their answers.
#[derive(Debug, Serialize)]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithAnswers>,
}

#[derive(Debug, Serialize)]
pub struct QuestionWithAnswers {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// Submission body for quiz grading: `{question_id: answer_id}`.
#[derive(Debug, Deserialize)]
pub struct SubmitQuiz {
    #[serde(default)]
    pub answers: HashMap<DbId, DbId>,
}
