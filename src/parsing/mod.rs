pub mod json_recovery;
pub mod line_recovery;
pub mod normalize;
pub mod outline;
pub mod validate;

pub use normalize::strip_reasoning;
pub use outline::{parse_outline, OutlineEntry};
pub use validate::{placeholder_quiz, validate_mcqs, DEFAULT_MIN_OPTIONS};

use serde::Deserialize;

use crate::models::domain::Mcq;

/// A structurally-parsed but not yet semantically-checked question record.
///
/// Recovery strategies may leave any field partially populated (missing
/// answer, too few options); the validator decides what survives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CandidateMcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Full MCQ recovery pipeline over raw model output.
///
/// Reasoning blocks are stripped exactly once here, before any structural
/// parse, so decoy JSON or option-like fragments inside them can never leak
/// into the recoverers. JSON recovery is the preferred path; the line-based
/// recoverer is only consulted when it yields nothing.
///
/// Never fails: malformed input produces an empty list, which callers are
/// expected to replace with [`placeholder_quiz`] on the course-quiz path.
pub fn recover_mcqs(raw: &str, min_options: usize) -> Vec<Mcq> {
    let text = strip_reasoning(raw);

    let mut candidates = json_recovery::recover_json_array(&text);
    if candidates.is_empty() {
        candidates = line_recovery::recover_mcq_lines(&text);
    }

    validate_mcqs(candidates, min_options)
}
