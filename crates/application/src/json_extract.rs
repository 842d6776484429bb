//! Best-effort extraction of a JSON object from model output
//!
//! Generative models often wrap JSON in markdown fences or chatter. This
//! trims that wrapping with plain substring operations. It does not balance
//! braces and does not understand string literals, so text like
//! `{"note": "}"} trailing }` can still be mis-cut. The caller's parse step
//! reports such cases.

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Narrow `raw` down to the span that most likely holds a JSON object
///
/// 1. Remove the first `` ```json `` marker and the whitespace after it.
/// 2. Remove a closing `` ``` `` at the very end.
/// 3. Trim, then cut everything before the first `{` and after the last
///    `}` unless the text already starts or ends with them.
///
/// Text without braces comes back trimmed and otherwise unchanged.
pub fn extract_json_object(raw: &str) -> String {
    let unfenced = strip_opening_fence(raw);
    let unfenced = strip_closing_fence(&unfenced);
    let mut text = unfenced.trim();

    if !text.starts_with('{') {
        if let Some(start) = text.find('{') {
            text = &text[start..];
        }
    }

    if !text.ends_with('}') {
        if let Some(end) = text.rfind('}') {
            text = &text[..=end];
        }
    }

    text.to_string()
}

fn strip_opening_fence(raw: &str) -> String {
    match raw.find(JSON_FENCE) {
        Some(pos) => {
            let rest = raw[pos + JSON_FENCE.len()..].trim_start();
            format!("{}{}", &raw[..pos], rest)
        },
        None => raw.to_string(),
    }
}

fn strip_closing_fence(text: &str) -> &str {
    let trimmed = text.trim_end();
    trimmed.strip_suffix(FENCE).unwrap_or(text)
}
