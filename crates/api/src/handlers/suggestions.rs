//! Handler for AI course suggestions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smarttutor_core::error::CoreError;
use smarttutor_core::validation::validate_weak_topics;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body: the topics a student is struggling with.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub weak_topics: Vec<String>,
}

/// POST /suggestions
///
/// Forward a weak-topics list to the AI collaborator and return its
/// suggested course JSON. An unparseable reply degrades to
/// `{error, raw_response}` with a 200; transport failures are a 502.
pub async fn suggest_course(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SuggestionRequest>,
) -> AppResult<impl IntoResponse> {
    validate_weak_topics(&input.weak_topics)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let outcome = state.ai.suggest_course(&input.weak_topics).await?;

    tracing::info!(
        user_id = auth.user_id,
        topics = input.weak_topics.len(),
        "Course suggestion requested"
    );

    Ok(Json(outcome.into_json()))
}
