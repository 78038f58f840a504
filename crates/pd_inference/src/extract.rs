use serde::Deserialize;
use pd_core::{parse_json, Error, ExtractedResult, Result};

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Unwraps `choices[0].message.content` from a completion envelope and parses
/// that string as the model's JSON answer.
pub fn extract(raw: &str) -> Result<ExtractedResult> {
    let envelope: ChatResponse = parse_json("completion envelope", raw)?;
    let content = envelope
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| Error::Schema("completion envelope: choices is empty".to_string()))?;

    parse_json("model answer", &content)
}
