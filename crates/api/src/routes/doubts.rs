//! Route definitions for doubts and chat sessions.
//!
//! Mounted at `/doubts` by `api_routes()`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::doubts;
use crate::state::AppState;

/// ```text
/// POST   /                    -> ask_doubt
/// GET    /history             -> doubt_history (?page, page_size, session_id)
/// DELETE /history/{id}        -> delete_doubt
/// DELETE /clear-all           -> clear_all_doubts
/// GET    /sessions            -> list_sessions
/// POST   /sessions            -> create_session
/// DELETE /sessions/{id}       -> delete_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(doubts::ask_doubt))
        .route("/history", get(doubts::doubt_history))
        .route("/history/{id}", delete(doubts::delete_doubt))
        .route("/clear-all", delete(doubts::clear_all_doubts))
        .route(
            "/sessions",
            get(doubts::list_sessions).post(doubts::create_session),
        )
        .route("/sessions/{id}", delete(doubts::delete_session))
}
