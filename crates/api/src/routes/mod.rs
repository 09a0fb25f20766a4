pub mod courses;
pub mod doubts;
pub mod health;
pub mod quizzes;
pub mod suggestions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /doubts                          POST ask a doubt
/// /doubts/history                  GET paginated history
/// /doubts/history/{id}             DELETE single doubt
/// /doubts/clear-all                DELETE all of the caller's doubts
/// /doubts/sessions                 GET list, POST create
/// /doubts/sessions/{id}            DELETE
///
/// /quizzes                         GET list, POST create
/// /quizzes/generate                POST AI quiz generation
/// /quizzes/{id}                    GET detail, DELETE
/// /quizzes/{id}/submit             POST grade a submission
/// /quizzes/{id}/attempts           GET the caller's attempts
///
/// /courses                         GET list, POST create
/// /courses/enrolled                GET the caller's enrollments
/// /courses/{id}                    GET detail, DELETE
/// /courses/{id}/lessons            GET list, POST create (owner)
/// /courses/{id}/enroll             POST idempotent enroll
/// /courses/{id}/progress           GET per-lesson progress, POST mark complete
///
/// /suggestions                     POST AI course suggestion
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/doubts", doubts::router())
        .nest("/quizzes", quizzes::router())
        .nest("/courses", courses::router())
        .nest("/suggestions", suggestions::router())
}
