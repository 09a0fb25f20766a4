//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope except the doubt
//! history payload, whose flat `{results, page, ...}` shape is part of
//! the client contract.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ... }` envelope for delete/acknowledge responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
