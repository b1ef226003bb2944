use once_cell::sync::Lazy;
use regex::Regex;

static THINK_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<think>.*?</think>").expect("think-block pattern is valid")
});

/// Removes every `<think>...</think>` reasoning segment, markers included.
///
/// Reasoning models interleave scratchpad text with their answer, and that
/// text frequently contains decoy JSON or option-like lines. Stripping must
/// happen before any structural parsing. Matching is case-insensitive and
/// spans newlines; input without markers passes through unchanged.
pub fn strip_reasoning(raw: &str) -> String {
    THINK_BLOCK_RE.replace_all(raw, "").into_owned()
}
