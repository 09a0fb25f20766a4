//! Route definitions for quizzes.
//!
//! Mounted at `/quizzes` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// ```text
/// GET    /                    -> list_quizzes
/// POST   /                    -> create_quiz
/// POST   /generate            -> generate_quiz (AI)
/// GET    /{id}                -> get_quiz
/// DELETE /{id}                -> delete_quiz
/// POST   /{id}/submit         -> submit_quiz
/// GET    /{id}/attempts       -> list_attempts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quizzes::list_quizzes).post(quizzes::create_quiz))
        .route("/generate", post(quizzes::generate_quiz))
        .route(
            "/{id}",
            get(quizzes::get_quiz).delete(quizzes::delete_quiz),
        )
        .route("/{id}/submit", post(quizzes::submit_quiz))
        .route("/{id}/attempts", get(quizzes::list_attempts))
}
