use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::CandidateMcq;

static FENCED_JSON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fenced-json pattern is valid")
});

static OBJECT_ARRAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("object-array pattern is valid")
});

static TRAILING_COMMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*([\]}])").expect("trailing-comma pattern is valid")
});

/// Locates and repairs a JSON array of question objects embedded in noisy
/// model output, then parses it strictly.
///
/// Models reliably wrap JSON in commentary or markdown fences despite
/// instructions, and often emit a trailing comma before a closing bracket.
/// This path is advisory: any failure is an empty result, never an error.
/// Input is expected to already be free of reasoning blocks.
pub fn recover_json_array(text: &str) -> Vec<CandidateMcq> {
    let mut working = text;

    if let Some(caps) = FENCED_JSON_RE.captures(working) {
        if let Some(interior) = caps.get(1) {
            working = interior.as_str();
        }
    }

    if let Some(span) = OBJECT_ARRAY_RE.find(working) {
        working = span.as_str();
    }

    let repaired = TRAILING_COMMA_RE.replace_all(working, "${1}");

    let parsed: Vec<Value> = match serde_json::from_str(&repaired) {
        Ok(values) => values,
        Err(err) => {
            log::debug!("JSON recovery failed, falling through: {}", err);
            return Vec::new();
        }
    };

    parsed
        .into_iter()
        .map(|value| CandidateMcq {
            question: value
                .get("question")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            options: value
                .get("options")
                .and_then(Value::as_array)
                .map(|options| {
                    options
                        .iter()
                        .filter_map(|option| option.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default(),
            answer: value
                .get("answer")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
