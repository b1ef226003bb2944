use crate::parsing::CandidateMcq;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A candidate that passes every validation rule under the 4-option
    /// policy.
    pub fn valid_candidate() -> CandidateMcq {
        CandidateMcq {
            question: "What color is the sky?".to_string(),
            options: vec![
                "Red".to_string(),
                "Blue".to_string(),
                "Green".to_string(),
                "Yellow".to_string(),
            ],
            answer: "Blue".to_string(),
        }
    }

    /// A realistic reasoning-model transcript: scratchpad block, prose,
    /// fenced JSON with a trailing comma.
    pub fn messy_quiz_transcript() -> String {
        [
            "<think>",
            "The user wants 1 question. Draft: maybe ask about ownership?",
            "[{\"question\": \"draft, do not use\"}]",
            "</think>",
            "Here is your quiz:",
            "```json",
            "[",
            "  {\"question\": \"What enforces memory safety in Rust?\",",
            "   \"options\": [\"Garbage collector\", \"Borrow checker\", \"Reference counting\", \"Manual free\"],",
            "   \"answer\": \"Borrow checker\"},",
            "]",
            "```",
            "Let me know if you need more!",
        ]
        .join("\n")
    }

    /// The line-oriented format models fall back to when they ignore the
    /// JSON instruction.
    pub fn line_format_quiz_transcript() -> String {
        [
            "Q1) What enforces memory safety in Rust?",
            "A) Garbage collector",
            "B) Borrow checker",
            "C) Reference counting",
            "D) Manual free",
            "Answer: B",
        ]
        .join("\n")
    }

    /// A lesson-marker outline with a stray reasoning block.
    pub fn outline_transcript() -> String {
        [
            "<think>Two lessons should do for this topic.</think>",
            "Lesson 1. Ownership in Rust: Learn moves, borrows, and lifetimes.",
            "Lesson 2. Error Handling in Rust: Master Result, Option, and the ? operator.",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::parsing;

    #[test]
    fn messy_transcript_recovers_one_question() {
        let mcqs = parsing::recover_mcqs(&messy_quiz_transcript(), 4);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "Borrow checker");
    }

    #[test]
    fn line_transcript_recovers_one_question() {
        let mcqs = parsing::recover_mcqs(&line_format_quiz_transcript(), 4);

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "Borrow checker");
    }

    #[test]
    fn outline_transcript_yields_two_lessons() {
        let normalized = parsing::strip_reasoning(&outline_transcript());
        let entries = parsing::parse_outline(&normalized);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Ownership in Rust");
    }

    #[test]
    fn valid_candidate_passes_validation() {
        let mcqs = parsing::validate_mcqs(vec![valid_candidate()], 4);
        assert_eq!(mcqs.len(), 1);
    }
}
