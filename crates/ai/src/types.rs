//! Wire types for the chat-completions API and the JSON shapes the
//! prompts ask the model to produce.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chat-completions wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Generated payload shapes
// ---------------------------------------------------------------------------

/// Quiz shape the generation prompt asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    #[serde(default)]
    pub difficulty: String,
    pub questions: Vec<QuizDraftQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDraftQuestion {
    pub text: String,
    pub options: Vec<String>,
    /// Correct option text, matching one entry in `options`.
    pub answer: String,
}

/// Course shape the suggestion prompt asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub lessons: Vec<CourseDraftLesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDraftLesson {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
}
