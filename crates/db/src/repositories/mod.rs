//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Ownership-scoped lookups
//! (`*_owned`) filter by `user_id` in SQL so an absent row and a row owned
//! by someone else are indistinguishable to the caller.

pub mod attempt_repo;
pub mod chat_session_repo;
pub mod course_repo;
pub mod doubt_repo;
pub mod enrollment_repo;
pub mod lesson_repo;
pub mod progress_repo;
pub mod quiz_repo;

pub use attempt_repo::AttemptRepo;
pub use chat_session_repo::ChatSessionRepo;
pub use course_repo::CourseRepo;
pub use doubt_repo::DoubtRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_repo::LessonRepo;
pub use progress_repo::ProgressRepo;
pub use quiz_repo::QuizRepo;
