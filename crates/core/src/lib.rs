//! Domain logic for the SmartTutor backend.
//!
//! This crate has no database or HTTP dependencies so it can be used by
//! the repository layer, the API, and any future CLI tooling. It holds the
//! error taxonomy, pagination clamping, quiz grading, input validation,
//! and the best-effort JSON extraction applied to LLM replies.

pub mod error;
pub mod grading;
pub mod json_extract;
pub mod pagination;
pub mod types;
pub mod validation;
