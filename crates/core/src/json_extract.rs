//! Best-effort JSON extraction from free-text LLM replies.
//!
//! Models asked to "return valid JSON only" still routinely wrap the payload
//! in prose or a markdown fence. Extraction takes the substring from the
//! first `{` to the last `}` and lets the caller attempt the parse. Callers
//! degrade gracefully when parsing still fails; this function never errors
//! on its own.

/// Extract the outermost brace-delimited block from `text`.
///
/// Returns `None` when no plausible JSON object is present (no `{`, no
/// closing `}` after it). The returned slice is not guaranteed to be valid
/// JSON; it is the caller's parse attempt that decides.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
