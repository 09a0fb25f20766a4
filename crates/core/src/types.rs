//! Shared type aliases used across all crates.

/// Database row identifier (BIGSERIAL / BIGINT).
pub type DbId = i64;

/// UTC timestamp as stored in `timestamptz` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
