//! Route definitions for AI course suggestions.
//!
//! Mounted at `/suggestions` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// ```text
/// POST   /                    -> suggest_course
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(suggestions::suggest_course))
}
