//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod chat;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod quiz;
