use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Repositories and handlers map these onto HTTP statuses in the api crate;
/// nothing in this crate knows about status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist, or exists but is not owned by the caller.
    /// Ownership misses are deliberately indistinguishable from absence.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
