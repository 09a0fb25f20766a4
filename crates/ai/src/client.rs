//! HTTP client for the chat-completions API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use smarttutor_core::json_extract::extract_json_block;

use crate::prompts;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CourseDraft, QuizDraft,
};

/// Default provider endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Model used for doubt answering and quiz generation.
pub const DEFAULT_ANSWER_MODEL: &str = "llama3-8b-8192";

/// Larger model used for course suggestions.
pub const DEFAULT_SUGGESTION_MODEL: &str = "llama3-70b-8192";

/// Default outbound request timeout in seconds. The provider call blocks
/// the handling request for its duration, so it is always bounded.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ANSWER_MAX_TOKENS: u32 = 300;
const QUIZ_MAX_TOKENS: u32 = 800;
const SUGGESTION_MAX_TOKENS: u32 = 1000;
const SUGGESTION_TEMPERATURE: f64 = 0.7;

/// Errors from the AI collaborator boundary.
///
/// These are typed rather than embedded in answer strings so callers can
/// distinguish "the AI said X" from "the AI call failed".
#[derive(Debug, thiserror::Error)]
pub enum AiClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("AI request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code. A missing or invalid
    /// API key surfaces here per request; it is not validated at startup.
    #[error("AI provider error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider replied 2xx but the body did not contain a message.
    #[error("AI provider returned a malformed reply: {0}")]
    MalformedReply(String),
}

/// Result of a JSON-producing generation call.
///
/// Transport and provider failures are `Err(AiClientError)`; this type
/// only distinguishes whether a successful reply parsed into the
/// requested shape.
#[derive(Debug, Clone)]
pub enum GenerateOutcome<T> {
    /// The reply parsed into the requested shape.
    Parsed(T),
    /// The reply arrived but was not parseable; carries the raw text so
    /// clients can inspect or salvage it.
    Unparsed { error: String, raw_response: String },
}

/// Configuration for the AI client.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of the OpenAI-compatible API.
    pub api_url: String,
    /// Bearer token. May be empty; the provider rejects each request.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for the external AI tutor API.
pub struct AiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl AiClient {
    /// Build a client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized, which
    /// is a startup-time misconfiguration.
    pub fn new(config: &AiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client for AI provider");
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Ask the tutor model to answer a student question.
    pub async fn answer(&self, question: &str) -> Result<String, AiClientError> {
        let request = ChatCompletionRequest {
            model: DEFAULT_ANSWER_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(prompts::TUTOR_SYSTEM_PROMPT),
                ChatMessage::user(question),
            ],
            max_tokens: ANSWER_MAX_TOKENS,
            temperature: None,
        };
        let reply = self.chat(&request).await?;
        Ok(reply.trim().to_string())
    }

    /// Generate a multiple-choice quiz for a topic.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: &str,
        num_questions: u32,
    ) -> Result<GenerateOutcome<QuizDraft>, AiClientError> {
        let request = ChatCompletionRequest {
            model: DEFAULT_ANSWER_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(prompts::JSON_SYSTEM_PROMPT),
                ChatMessage::user(prompts::quiz_prompt(topic, difficulty, num_questions)),
            ],
            max_tokens: QUIZ_MAX_TOKENS,
            temperature: None,
        };
        let reply = self.chat(&request).await?;
        Ok(parse_reply::<QuizDraft>(&reply, |quiz| {
            if quiz.questions.is_empty() {
                Err("Invalid quiz format: empty questions list".to_string())
            } else {
                Ok(())
            }
        }))
    }

    /// Suggest a compact course for a student's weak topics.
    pub async fn suggest_course(
        &self,
        weak_topics: &[String],
    ) -> Result<GenerateOutcome<CourseDraft>, AiClientError> {
        let request = ChatCompletionRequest {
            model: DEFAULT_SUGGESTION_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(prompts::JSON_SYSTEM_PROMPT),
                ChatMessage::user(prompts::suggestion_prompt(weak_topics)),
            ],
            max_tokens: SUGGESTION_MAX_TOKENS,
            temperature: Some(SUGGESTION_TEMPERATURE),
        };
        let reply = self.chat(&request).await?;
        Ok(parse_reply::<CourseDraft>(&reply, |course| {
            if course.lessons.is_empty() {
                Err("Invalid course format: empty lessons list".to_string())
            } else {
                Ok(())
            }
        }))
    }

    /// Send a chat-completions request and return the first choice's text.
    async fn chat(&self, request: &ChatCompletionRequest) -> Result<String, AiClientError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "AI provider returned an error");
            return Err(AiClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AiClientError::MalformedReply(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiClientError::MalformedReply("reply contained no choices".to_string()))
    }
}

impl<T: Serialize> GenerateOutcome<T> {
    /// Serialize the outcome into the response payload: the parsed value
    /// itself, or an error-shaped `{error, raw_response}` object.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            GenerateOutcome::Parsed(value) => {
                serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
            }
            GenerateOutcome::Unparsed {
                error,
                raw_response,
            } => serde_json::json!({
                "error": error,
                "raw_response": raw_response,
            }),
        }
    }
}

/// Parse a model reply into `T`, applying best-effort brace extraction
/// first and an optional shape check after. Never errors: failures
/// degrade to [`GenerateOutcome::Unparsed`] carrying the raw text.
fn parse_reply<T: DeserializeOwned>(
    reply: &str,
    check: impl FnOnce(&T) -> Result<(), String>,
) -> GenerateOutcome<T> {
    let candidate = extract_json_block(reply).unwrap_or(reply);
    match serde_json::from_str::<T>(candidate) {
        Ok(value) => match check(&value) {
            Ok(()) => GenerateOutcome::Parsed(value),
            Err(error) => GenerateOutcome::Unparsed {
                error,
                raw_response: reply.to_string(),
            },
        },
        Err(e) => GenerateOutcome::Unparsed {
            error: e.to_string(),
            raw_response: reply.to_string(),
        },
    }
}
