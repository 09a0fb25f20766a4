//! Prompt builders for the three AI operations.

/// System prompt for doubt answering.
pub const TUTOR_SYSTEM_PROMPT: &str = "You are a helpful AI tutor.";

/// System prompt for JSON-producing operations.
pub const JSON_SYSTEM_PROMPT: &str =
    "You are a helpful AI tutor that ONLY returns valid JSON.";

/// Build the quiz-generation prompt for a topic.
pub fn quiz_prompt(topic: &str, difficulty: &str, num_questions: u32) -> String {
    format!(
        r#"Create a multiple-choice quiz on the topic: "{topic}".
Difficulty: {difficulty}.
Number of questions: {num_questions}.
Return valid JSON only. Do not include explanations or extra text.
Format strictly as:
{{
  "title": "string",
  "difficulty": "{difficulty}",
  "questions": [
    {{
      "text": "string",
      "options": ["option1", "option2", "option3", "option4"],
      "answer": "correct option text"
    }}
  ]
}}"#
    )
}

/// Build the course-suggestion prompt from a weak-topics list.
pub fn suggestion_prompt(weak_topics: &[String]) -> String {
    let topics = weak_topics.join(", ");
    format!(
        r#"Suggest a compact learning course for a student weak in {topics}.
Return ONLY valid JSON in this exact format:
{{
  "title": "string",
  "description": "string",
  "lessons": [
    {{
      "title": "string",
      "summary": "string",
      "content": "string (optional)"
    }}
  ]
}}"#
    )
}
