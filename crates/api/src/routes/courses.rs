//! Route definitions for courses, lessons, enrollment, and progress.
//!
//! Mounted at `/courses` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// ```text
/// GET    /                    -> list_courses
/// POST   /                    -> create_course
/// GET    /enrolled            -> list_enrollments
/// GET    /{id}                -> get_course
/// DELETE /{id}                -> delete_course
/// GET    /{id}/lessons        -> list_lessons
/// POST   /{id}/lessons        -> create_lesson (owner only)
/// POST   /{id}/enroll         -> enroll
/// GET    /{id}/progress       -> course_progress
/// POST   /{id}/progress       -> mark_lesson_complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route("/enrolled", get(courses::list_enrollments))
        .route(
            "/{id}",
            get(courses::get_course).delete(courses::delete_course),
        )
        .route(
            "/{id}/lessons",
            get(courses::list_lessons).post(courses::create_lesson),
        )
        .route("/{id}/enroll", post(courses::enroll))
        .route(
            "/{id}/progress",
            get(courses::course_progress).post(courses::mark_lesson_complete),
        )
}
