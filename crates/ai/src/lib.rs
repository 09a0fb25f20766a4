//! AI collaborator client.
//!
//! Wraps an OpenAI-compatible chat-completions API (Groq in production)
//! behind three operations the platform needs: tutoring answers, quiz
//! generation, and course suggestions. Transport and provider errors are
//! typed; a reply that arrives but fails JSON parsing degrades to an
//! [`client::GenerateOutcome::Unparsed`] value carrying the raw text.

pub mod client;
pub mod prompts;
pub mod types;

pub use client::{AiClient, AiClientError, AiConfig, GenerateOutcome};
