use std::sync::Arc;

use smarttutor_ai::AiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: smarttutor_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI collaborator client.
    pub ai: Arc<AiClient>,
}
