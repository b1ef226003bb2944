use once_cell::sync::Lazy;
use regex::Regex;

use super::CandidateMcq;

static QUESTION_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Q\d+[):]\s*(.*)$").expect("question-marker pattern is valid")
});

static OPTION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Da-d])[).:\-]\s*(.*)$").expect("option-line pattern is valid")
});

static ANSWER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^answer\s*[:\-]?\s*(.*)$").expect("answer-line pattern is valid")
});

const EXPECTED_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Fallback recoverer for letter-labelled Q/A text when the output is not
/// JSON-shaped.
///
/// Deliberately over-permissive: reordered, partially-labelled or otherwise
/// malformed blocks are reconstructed on a best-effort basis rather than
/// rejected, because re-prompting the model costs far more than a lossy
/// recovery. Blocks that cannot be salvaged are skipped silently; this
/// function never fails. Input is expected to already be free of reasoning
/// blocks.
pub fn recover_mcq_lines(text: &str) -> Vec<CandidateMcq> {
    split_question_blocks(text)
        .iter()
        .filter_map(|block| parse_block(block))
        .collect()
}

/// Groups lines into blocks, each starting at a `Q<n>)` / `Q<n>:` marker
/// line. Lines before the first marker belong to no block and are dropped.
fn split_question_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if QUESTION_MARKER_RE.is_match(trimmed) {
            blocks.push(vec![trimmed.to_string()]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(trimmed.to_string());
        }
    }

    blocks
}

fn parse_block(lines: &[String]) -> Option<CandidateMcq> {
    let marker_caps = QUESTION_MARKER_RE.captures(lines.first()?)?;
    let mut question = marker_caps
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    // Some models put the question on its own line after the marker.
    let mut body_start = 1;
    if question.is_empty() {
        if let Some(next) = lines.get(1) {
            if !OPTION_LINE_RE.is_match(next) {
                question = next.clone();
                body_start = 2;
            }
        }
    }

    // Insertion-ordered label map, last write wins on duplicate labels.
    let mut options: Vec<(char, String)> = Vec::new();
    let mut raw_answer: Option<String> = None;

    for line in &lines[body_start.min(lines.len())..] {
        if let Some(caps) = OPTION_LINE_RE.captures(line) {
            let label = caps[1].chars().next().unwrap_or('A').to_ascii_uppercase();
            let value = caps[2].trim().to_string();
            match options.iter_mut().find(|(existing, _)| *existing == label) {
                Some(slot) => slot.1 = value,
                None => options.push((label, value)),
            }
            continue;
        }
        if let Some(caps) = ANSWER_LINE_RE.captures(line) {
            raw_answer = Some(caps[1].trim().to_string());
        }
    }

    let mut answer_label = raw_answer
        .as_deref()
        .and_then(|raw| resolve_answer_label(raw, &options));

    // Last resort: an option that flags itself as the correct one.
    if answer_label.is_none() {
        answer_label = options
            .iter()
            .find(|(_, text)| {
                let lowered = text.to_lowercase();
                lowered.contains("correct") || lowered.contains("right")
            })
            .map(|(label, _)| *label);
    }

    let answer_label = answer_label?;
    let answer_text = options
        .iter()
        .find(|(label, _)| *label == answer_label)
        .map(|(_, text)| text.clone())?;

    if question.is_empty() || options.len() < 2 {
        return None;
    }

    // Fixed-width option list: every expected slot present, missing labels
    // become empty placeholders so downstream handling stays uniform.
    let padded: Vec<String> = EXPECTED_LABELS
        .iter()
        .map(|expected| {
            options
                .iter()
                .find(|(label, _)| label == expected)
                .map(|(_, text)| text.clone())
                .unwrap_or_default()
        })
        .collect();

    Some(CandidateMcq {
        question,
        options: padded,
        answer: answer_text,
    })
}

/// Resolves the raw answer value to an option label, in priority order:
/// a lone letter, a letter followed by a delimiter, then case-insensitive
/// substring containment in either direction against the option texts.
///
/// The bidirectional containment is heuristic and kept for compatibility
/// with model habits like "Answer: The sky is blue"; swap this function for
/// a stricter strategy if false positives become a problem.
fn resolve_answer_label(raw: &str, options: &[(char, String)]) -> Option<char> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut chars = raw.chars();
    let first = chars.next()?;
    let upper = first.to_ascii_uppercase();

    if EXPECTED_LABELS.contains(&upper) {
        match chars.next() {
            None => return Some(upper),
            Some(delimiter) if matches!(delimiter, ')' | '.' | ':' | '-') => return Some(upper),
            _ => {}
        }
    }

    let raw_lower = raw.to_lowercase();
    options
        .iter()
        .find(|(_, text)| {
            let text_lower = text.to_lowercase();
            !text_lower.is_empty()
                && (raw_lower.contains(&text_lower) || text_lower.contains(&raw_lower))
        })
        .map(|(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_canonical_block() {
        let text = "Q1) What color is the sky?\nA) Red\nB) Blue\nC) Green\nD) Yellow\nAnswer: B";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question, "What color is the sky?");
        assert_eq!(mcqs[0].options, vec!["Red", "Blue", "Green", "Yellow"]);
        assert_eq!(mcqs[0].answer, "Blue");
    }

    #[test]
    fn resolves_answer_by_text_substring() {
        let text = "Q1) What color is the sky?\nA) Red\nB) Blue\nC) Green\nD) Yellow\nAnswer: The sky is blue";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "Blue");
    }

    #[test]
    fn resolves_answer_with_letter_and_delimiter() {
        let text = "Q1) Pick one\nA) alpha\nB) beta\nAnswer: B) beta";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "beta");
    }

    #[test]
    fn question_may_follow_marker_on_next_line() {
        let text = "Q1)\nWhat is Rust?\nA) A language\nB) A metal oxide\nAnswer: A";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question, "What is Rust?");
        assert_eq!(mcqs[0].answer, "A language");
    }

    #[test]
    fn duplicate_labels_last_write_wins() {
        let text = "Q1) Duplicates?\nA) first\nB) other\nA) second\nAnswer: A";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "second");
        assert_eq!(mcqs[0].options[0], "second");
    }

    #[test]
    fn missing_labels_become_empty_placeholders() {
        let text = "Q1) Sparse?\nA) yes\nC) no\nAnswer: A";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].options, vec!["yes", "", "no", ""]);
    }

    #[test]
    fn falls_back_to_correct_keyword_when_answer_missing() {
        let text = "Q1) Which one?\nA) wrong choice\nB) the correct choice\nC) another\nD) last";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "the correct choice");
    }

    #[test]
    fn block_with_single_option_is_skipped() {
        let text = "Q1) Lonely?\nA) only option\nAnswer: A";

        assert!(recover_mcq_lines(text).is_empty());
    }

    #[test]
    fn block_without_resolvable_answer_is_skipped() {
        let text = "Q1) Unanswerable?\nA) one\nB) two\nAnswer: something entirely unrelated";

        assert!(recover_mcq_lines(text).is_empty());
    }

    #[test]
    fn prose_before_first_marker_is_discarded() {
        let text = "Here are your questions:\nGood luck!\nQ1) Real?\nA) yes\nB) no\nAnswer: A";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question, "Real?");
    }

    #[test]
    fn multiple_blocks_keep_input_order() {
        let text = "Q1) First?\nA) a1\nB) b1\nAnswer: A\n\nQ2: Second?\nA) a2\nB) b2\nAnswer: B";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 2);
        assert_eq!(mcqs[0].question, "First?");
        assert_eq!(mcqs[1].question, "Second?");
        assert_eq!(mcqs[1].answer, "b2");
    }

    #[test]
    fn explanation_lines_are_ignored() {
        let text = "Q1) Sturdy?\nA) yes\nB) no\nExplanation: because reasons\nAnswer: B";

        let mcqs = recover_mcq_lines(text);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "no");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(recover_mcq_lines("").is_empty());
        assert!(recover_mcq_lines("\n\n  \n").is_empty());
    }
}
