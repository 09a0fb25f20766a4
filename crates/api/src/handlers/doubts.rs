//! Handlers for doubts and chat sessions.
//!
//! A doubt is one student question plus its AI-generated answer. Every
//! operation here is scoped to the authenticated caller; a doubt or
//! session belonging to someone else is indistinguishable from one that
//! does not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smarttutor_core::error::CoreError;
use smarttutor_core::pagination::PageWindow;
use smarttutor_core::types::DbId;
use smarttutor_core::validation::validate_question;
use smarttutor_db::models::chat::{AskDoubt, CreateChatSession};
use smarttutor_db::repositories::{ChatSessionRepo, CourseRepo, DoubtRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Raw query parameters for the history endpoint.
///
/// Kept as strings so malformed values fall back to defaults instead of
/// being rejected by the extractor; that forgiveness is part of the
/// client contract.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub session_id: Option<String>,
}

/// POST /doubts
///
/// Ask a question, obtain the AI answer synchronously, and persist the
/// pair. Supplied session/course/lesson links must resolve for the
/// caller, else 404 and nothing is persisted. An AI failure is a 502;
/// nothing is persisted in that case either.
pub async fn ask_doubt(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AskDoubt>,
) -> AppResult<impl IntoResponse> {
    validate_question(&input.question)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let question = input.question.trim().to_string();

    if let Some(session_id) = input.session {
        ChatSessionRepo::find_owned(&state.pool, session_id, auth.user_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "ChatSession",
                id: session_id,
            }))?;
    }

    if let Some(course_id) = input.course {
        CourseRepo::find_by_id(&state.pool, course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Course",
                id: course_id,
            }))?;
    }

    if let Some(lesson_id) = input.lesson {
        let lesson = LessonRepo::find_by_id(&state.pool, lesson_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Lesson",
                id: lesson_id,
            }))?;
        // A lesson link must agree with an explicit course link.
        if let Some(course_id) = input.course {
            if lesson.course_id != course_id {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Lesson",
                    id: lesson_id,
                }));
            }
        }
    }

    let answer = state.ai.answer(&question).await?;

    let doubt = DoubtRepo::create(
        &state.pool,
        auth.user_id,
        &question,
        &answer,
        input.session,
        input.lesson,
        input.course,
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        doubt_id = doubt.id,
        session_id = ?doubt.session_id,
        "Doubt answered and persisted"
    );

    Ok((StatusCode::CREATED, Json(doubt)))
}

/// GET /doubts/history?page=&page_size=&session_id=
///
/// Paginated history of the caller's doubts, newest first. The payload
/// shape `{results, page, page_size, total, has_more}` is flat by
/// contract, not wrapped in the data envelope.
pub async fn doubt_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let window = PageWindow::from_raw(params.page.as_deref(), params.page_size.as_deref());
    // A non-numeric session filter is treated as absent, matching the
    // forgiving paging parameters.
    let session_id: Option<DbId> = params
        .session_id
        .as_deref()
        .and_then(|s| s.parse().ok());

    let history = DoubtRepo::history(&state.pool, auth.user_id, window, session_id).await?;
    Ok(Json(history))
}

/// DELETE /doubts/history/{id}
pub async fn delete_doubt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DoubtRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Doubt", id }));
    }
    Ok(Json(MessageResponse {
        message: "Doubt deleted".to_string(),
    }))
}

/// DELETE /doubts/clear-all
///
/// Unconditionally deletes every doubt owned by the caller.
pub async fn clear_all_doubts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let deleted = DoubtRepo::clear_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, deleted, "Cleared doubt history");
    Ok(Json(serde_json::json!({
        "message": "All doubts cleared",
        "deleted": deleted,
    })))
}

/// GET /doubts/sessions
pub async fn list_sessions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sessions = ChatSessionRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// POST /doubts/sessions
pub async fn create_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateChatSession>,
) -> AppResult<impl IntoResponse> {
    if let Some(course_id) = input.course {
        CourseRepo::find_by_id(&state.pool, course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Course",
                id: course_id,
            }))?;
    }
    if let Some(lesson_id) = input.lesson {
        LessonRepo::find_by_id(&state.pool, lesson_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Lesson",
                id: lesson_id,
            }))?;
    }

    let session = ChatSessionRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// DELETE /doubts/sessions/{id}
///
/// Deletes the session and, by cascade, the doubts within it.
pub async fn delete_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ChatSessionRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ChatSession",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: "Session deleted".to_string(),
    }))
}
