//! Handlers for course CRUD, lessons, enrollment, and progress.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use smarttutor_core::error::CoreError;
use smarttutor_core::types::DbId;
use smarttutor_core::validation::{validate_difficulty, validate_title};
use smarttutor_db::models::course::{CourseDetail, CreateCourse};
use smarttutor_db::models::lesson::CreateLesson;
use smarttutor_db::models::progress::MarkLessonComplete;
use smarttutor_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo, ProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /courses
pub async fn list_courses(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /courses
pub async fn create_course(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if let Some(ref difficulty) = input.difficulty {
        validate_difficulty(difficulty)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let course = CourseRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, course_id = course.id, "Course created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// GET /courses/{id}
///
/// Course detail with lessons in display order.
pub async fn get_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    let lessons = LessonRepo::list_by_course(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: CourseDetail { course, lessons },
    }))
}

/// DELETE /courses/{id}
///
/// Owner only; lessons, enrollments, and progress cascade.
pub async fn delete_course(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CourseRepo::delete_owned(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    Ok(Json(crate::response::MessageResponse {
        message: "Course deleted".to_string(),
    }))
}

/// GET /courses/{id}/lessons
pub async fn list_lessons(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    let lessons = LessonRepo::list_by_course(&state.pool, id).await?;
    Ok(Json(DataResponse { data: lessons }))
}

/// POST /courses/{id}/lessons
///
/// Only the course owner may add lessons; anyone else sees a 404.
pub async fn create_lesson(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateLesson>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let course = CourseRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    let lesson = LessonRepo::create(&state.pool, course.id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: lesson })))
}

/// POST /courses/{id}/enroll
///
/// Idempotent: enrolling twice returns the same single row.
pub async fn enroll(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    let enrollment = EnrollmentRepo::get_or_create(&state.pool, auth.user_id, id).await?;

    tracing::info!(user_id = auth.user_id, course_id = id, "Enrollment ensured");

    Ok(Json(DataResponse { data: enrollment }))
}

/// GET /courses/enrolled
pub async fn list_enrollments(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let enrolled = EnrollmentRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: enrolled }))
}

/// GET /courses/{id}/progress
///
/// The caller's per-lesson completion flags and scores for this course.
/// Lessons without a progress row appear as not completed.
pub async fn course_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    let progress = ProgressRepo::list_for_course(&state.pool, auth.user_id, id).await?;
    Ok(Json(DataResponse { data: progress }))
}

/// POST /courses/{id}/progress
///
/// Manually mark a lesson of this course complete. The caller must be
/// enrolled and the lesson must belong to the course.
pub async fn mark_lesson_complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MarkLessonComplete>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    EnrollmentRepo::find(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }))?;

    let lesson = LessonRepo::find_in_course(&state.pool, input.lesson, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: input.lesson,
        }))?;

    let progress = ProgressRepo::mark_complete(&state.pool, auth.user_id, lesson.id).await?;

    tracing::info!(
        user_id = auth.user_id,
        lesson_id = lesson.id,
        "Lesson marked complete"
    );

    Ok(Json(DataResponse { data: progress }))
}
