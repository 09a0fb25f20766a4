//! Write-time input validation shared by the API handlers.

/// Allowed difficulty values for courses and generated quizzes.
pub const DIFFICULTIES: &[&str] = &["easy", "medium", "hard"];

/// Default number of questions for AI quiz generation.
pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

/// Upper bound on questions per generated quiz.
pub const MAX_NUM_QUESTIONS: u32 = 20;

/// A doubt question must contain at least one non-whitespace character.
pub fn validate_question(question: &str) -> Result<(), String> {
    if question.trim().is_empty() {
        return Err("No question provided".to_string());
    }
    Ok(())
}

/// Titles for courses, lessons, and quizzes must be non-blank.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    Ok(())
}

pub fn validate_difficulty(difficulty: &str) -> Result<(), String> {
    if DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(format!(
            "Invalid difficulty '{difficulty}'. Expected one of: {}",
            DIFFICULTIES.join(", ")
        ))
    }
}

/// Weak-topic lists for course suggestions must be non-empty and contain
/// at least one non-blank entry.
pub fn validate_weak_topics(topics: &[String]) -> Result<(), String> {
    if topics.iter().all(|t| t.trim().is_empty()) {
        return Err("Please provide a list of weak_topics".to_string());
    }
    Ok(())
}

/// Each quiz question must carry exactly one answer flagged correct.
///
/// Enforced at write time so grading never has to disambiguate.
pub fn validate_one_correct_answer(correct_flags: &[bool]) -> Result<(), String> {
    match correct_flags.iter().filter(|&&c| c).count() {
        1 => Ok(()),
        0 => Err("Question must have exactly one correct answer, found none".to_string()),
        n => Err(format!(
            "Question must have exactly one correct answer, found {n}"
        )),
    }
}

/// Clamp the requested generated-question count into `[1, MAX_NUM_QUESTIONS]`,
/// falling back to the default when absent.
pub fn resolve_num_questions(requested: Option<u32>) -> u32 {
    match requested {
        Some(n) if (1..=MAX_NUM_QUESTIONS).contains(&n) => n,
        Some(_) | None => DEFAULT_NUM_QUESTIONS,
    }
}
