//! Handlers for quiz CRUD, grading, and AI generation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smarttutor_core::error::CoreError;
use smarttutor_core::grading;
use smarttutor_core::types::DbId;
use smarttutor_core::validation::{
    resolve_num_questions, validate_difficulty, validate_one_correct_answer, validate_title,
};
use smarttutor_db::models::quiz::{CreateQuiz, SubmitQuiz};
use smarttutor_db::repositories::{AttemptRepo, LessonRepo, ProgressRepo, QuizRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /quizzes
pub async fn list_quizzes(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let quizzes = QuizRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: quizzes }))
}

/// POST /quizzes
///
/// Create a quiz with nested questions and answers. Each question must
/// carry exactly one answer flagged correct; the grading contract relies
/// on it.
pub async fn create_quiz(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateQuiz>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    for (index, question) in input.questions.iter().enumerate() {
        let flags: Vec<bool> = question.answers.iter().map(|a| a.is_correct).collect();
        validate_one_correct_answer(&flags).map_err(|msg| {
            AppError::Core(CoreError::Validation(format!("Question {}: {msg}", index + 1)))
        })?;
    }

    if let Some(lesson_id) = input.lesson_id {
        LessonRepo::find_by_id(&state.pool, lesson_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Lesson",
                id: lesson_id,
            }))?;
    }

    let quiz = QuizRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        quiz_id = quiz.id,
        questions = input.questions.len(),
        "Quiz created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: quiz })))
}

/// GET /quizzes/{id}
///
/// Quiz detail with ordered questions and answers. Correctness flags are
/// not serialized, so the answer key stays server-side.
pub async fn get_quiz(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = QuizRepo::detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quiz", id }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /quizzes/{id}
pub async fn delete_quiz(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuizRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Quiz", id }));
    }
    Ok(Json(MessageResponse {
        message: "Quiz deleted".to_string(),
    }))
}

/// POST /quizzes/{id}/submit
///
/// Grade a `{question_id: answer_id}` map against the stored answer key.
/// Records an attempt with per-question responses and, when the quiz is
/// linked to a lesson, upserts the caller's progress row -- completed
/// once the percentage reaches 70.
///
/// The response body is the flat `{score, total, percentage}` contract.
pub async fn submit_quiz(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitQuiz>,
) -> AppResult<impl IntoResponse> {
    let quiz = QuizRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quiz", id }))?;

    let key = QuizRepo::answer_key(&state.pool, quiz.id).await?;
    let grade = grading::grade(&key, &input.answers);

    let attempt = AttemptRepo::record(&state.pool, auth.user_id, quiz.id, &grade).await?;

    if let Some(lesson_id) = quiz.lesson_id {
        ProgressRepo::record_score(
            &state.pool,
            auth.user_id,
            lesson_id,
            grade.summary.percentage,
            grade.is_passing(),
        )
        .await?;
    }

    tracing::info!(
        user_id = auth.user_id,
        quiz_id = quiz.id,
        attempt_id = attempt.id,
        score = grade.summary.score,
        total = grade.summary.total,
        percentage = grade.summary.percentage,
        "Quiz submission graded"
    );

    Ok(Json(grade.summary))
}

/// GET /quizzes/{id}/attempts
///
/// The caller's recorded attempts for this quiz, newest first.
pub async fn list_attempts(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    QuizRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quiz", id }))?;

    let attempts = AttemptRepo::list_for_quiz(&state.pool, auth.user_id, id).await?;
    Ok(Json(DataResponse { data: attempts }))
}

/// Request body for AI quiz generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub num_questions: Option<u32>,
}

/// POST /quizzes/generate
///
/// Forward a topic to the AI collaborator and return its quiz JSON.
/// A reply that fails parsing degrades to `{error, raw_response}` with a
/// 200 status; only transport/provider failures are a 502.
pub async fn generate_quiz(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GenerateQuizRequest>,
) -> AppResult<impl IntoResponse> {
    let topic = input
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Topic is required".to_string())))?;

    let difficulty = input.difficulty.as_deref().unwrap_or("medium");
    validate_difficulty(difficulty).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let num_questions = resolve_num_questions(input.num_questions);

    let outcome = state
        .ai
        .generate_quiz(topic, difficulty, num_questions)
        .await?;

    tracing::info!(user_id = auth.user_id, topic, "Quiz generation requested");

    Ok(Json(outcome.into_json()))
}
