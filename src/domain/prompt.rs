//! Prompt construction for the answer request

use serde_json::Value;

/// Instruction appended to every prompt. The exact wording is part of the
/// observable contract; callers and scenario tests depend on it verbatim.
pub const ANSWER_INSTRUCTION: &str = "Analyze the question and options carefully. \
Return only the number (1, 2, 3, etc.) of the correct answer.";

/// Build the single-turn prompt sent to the provider.
pub fn build_prompt(question: &str, options: &Value) -> String {
    format!(
        "Question: {}\nOptions: {}\n\n{}",
        question,
        render_options(options),
        ANSWER_INSTRUCTION
    )
}

/// Render the caller-supplied options into prompt text.
///
/// The options field has no fixed schema, so the rendering must be stable:
/// a JSON string is used as-is, anything else is serialized as compact JSON
/// (serde_json maps keep keys sorted, so objects render deterministically).
pub fn render_options(options: &Value) -> String {
    match options {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
