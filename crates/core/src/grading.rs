//! Quiz grading.
//!
//! Pure functions over the answer key of a quiz and a submitted
//! `{question_id: answer_id}` map. The repository layer supplies the key;
//! nothing here touches the database.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::DbId;

/// Completion threshold: a lesson is marked complete when the attempt
/// percentage reaches this value (inclusive).
pub const PASS_THRESHOLD_PCT: f64 = 70.0;

/// One answer option in the grading key.
#[derive(Debug, Clone)]
pub struct AnswerKey {
    pub id: DbId,
    pub is_correct: bool,
}

/// One question in the grading key, with its own answer options.
#[derive(Debug, Clone)]
pub struct QuestionKey {
    pub id: DbId,
    pub answers: Vec<AnswerKey>,
}

/// Outcome of grading a single question, recorded per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: DbId,
    /// The submitted answer id, if it was supplied *and* belongs to this
    /// question. A foreign answer id is treated as unanswered.
    pub selected_answer_id: Option<DbId>,
    pub correct: bool,
}

/// Grading summary returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeSummary {
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
}

/// Full grading result: the summary plus per-question outcomes.
#[derive(Debug, Clone)]
pub struct Grade {
    pub summary: GradeSummary,
    pub outcomes: Vec<QuestionOutcome>,
}

impl Grade {
    /// Whether this attempt crosses the completion threshold.
    pub fn is_passing(&self) -> bool {
        self.summary.percentage >= PASS_THRESHOLD_PCT
    }
}

/// Grade a submission against the quiz's answer key.
///
/// Every question in `key` counts toward `total`, answered or not. A
/// submitted answer id scores only if it is one of that question's own
/// answers and carries the correct flag. `percentage` is `0.0` for an
/// empty quiz rather than a division fault.
pub fn grade(key: &[QuestionKey], submitted: &HashMap<DbId, DbId>) -> Grade {
    let mut score = 0;
    let mut outcomes = Vec::with_capacity(key.len());

    for question in key {
        let selected = submitted
            .get(&question.id)
            .and_then(|answer_id| question.answers.iter().find(|a| a.id == *answer_id));

        let correct = selected.map(|a| a.is_correct).unwrap_or(false);
        if correct {
            score += 1;
        }

        outcomes.push(QuestionOutcome {
            question_id: question.id,
            selected_answer_id: selected.map(|a| a.id),
            correct,
        });
    }

    let total = key.len() as i32;
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(total) * 100.0
    };

    Grade {
        summary: GradeSummary {
            score,
            total,
            percentage,
        },
        outcomes,
    }
}
