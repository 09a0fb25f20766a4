//! HTTP request handlers, grouped by resource.

pub mod courses;
pub mod doubts;
pub mod quizzes;
pub mod suggestions;
