use std::collections::HashSet;

use super::CandidateMcq;
use crate::models::domain::Mcq;

/// Option floor applied on the course-quiz pipeline. Overridable through
/// `Config::quiz_min_options`; the line recoverer itself only guarantees two
/// captured labels.
pub const DEFAULT_MIN_OPTIONS: usize = 4;

pub const PLACEHOLDER_QUESTION: &str =
    "No valid quiz questions could be generated for this lesson.";

/// Applies the semantic acceptance rules to candidate records, in input
/// order:
///
/// 1. options empty after trimming are dropped; fewer than `min_options`
///    remaining rejects the candidate,
/// 2. the trimmed question must be non-empty and unique within this batch
///    (exact, case-sensitive; duplicate suppression does not carry across
///    calls),
/// 3. the trimmed answer must be non-empty and byte-exact among the kept
///    options.
pub fn validate_mcqs(candidates: Vec<CandidateMcq>, min_options: usize) -> Vec<Mcq> {
    let mut seen_questions: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    for (index, candidate) in candidates.into_iter().enumerate() {
        let options: Vec<String> = candidate
            .options
            .into_iter()
            .filter(|option| !option.trim().is_empty())
            .collect();
        if options.len() < min_options {
            log::warn!(
                "quiz candidate {} skipped: {} options, need {}",
                index + 1,
                options.len(),
                min_options
            );
            continue;
        }

        let question = candidate.question.trim().to_string();
        if question.is_empty() || seen_questions.contains(&question) {
            log::warn!("quiz candidate {} skipped: duplicate or empty question", index + 1);
            continue;
        }

        let answer = candidate.answer.trim().to_string();
        if answer.is_empty() || !options.iter().any(|option| option == &answer) {
            log::warn!("quiz candidate {} skipped: answer missing or not in options", index + 1);
            continue;
        }

        seen_questions.insert(question.clone());
        accepted.push(Mcq {
            question,
            options,
            answer,
        });
    }

    accepted
}

/// The single-record fallback quiz substituted when validation accepts
/// nothing, so downstream consumers can assume quizzes are never empty.
pub fn placeholder_quiz() -> Vec<Mcq> {
    vec![Mcq {
        question: PLACEHOLDER_QUESTION.to_string(),
        options: vec!["N/A".to_string(); 4],
        answer: "N/A".to_string(),
    }]
}
