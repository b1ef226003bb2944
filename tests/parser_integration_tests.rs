//! End-to-end recovery-pipeline tests over realistic model transcripts:
//! reasoning blocks, markdown fences, broken JSON, and the line-oriented
//! fallback format, through to validated quizzes and outlines.

use skillmint_server::parsing::{
    parse_outline, placeholder_quiz, recover_mcqs, strip_reasoning, validate_mcqs,
    OutlineEntry, DEFAULT_MIN_OPTIONS,
};

#[test]
fn json_quiz_with_fence_and_trailing_comma_survives() {
    let transcript = r#"<think>
Let me draft some questions about Python functions first.
Q1) Draft decoy?
A) yes
B) no
Answer: A
</think>
Sure! Here are your questions:

```json
[
  {
    "question": "What is the main purpose of using functions in Python?",
    "options": ["To store data", "To reduce code repetition", "To handle exceptions", "To create classes"],
    "answer": "To reduce code repetition"
  },
  {
    "question": "Which keyword defines a function in Python?",
    "options": ["func", "def", "fn", "lambda"],
    "answer": "def",
  },
]
```

Hope these help with your course!"#;

    let mcqs = recover_mcqs(transcript, DEFAULT_MIN_OPTIONS);

    assert_eq!(mcqs.len(), 2);
    assert_eq!(
        mcqs[0].question,
        "What is the main purpose of using functions in Python?"
    );
    assert_eq!(mcqs[0].answer, "To reduce code repetition");
    assert_eq!(mcqs[1].answer, "def");
}

#[test]
fn line_format_fallback_kicks_in_when_json_is_absent() {
    let transcript = "Here are 2 questions for you.\n\n\
        Q1) What color is the sky?\n\
        A) Red\n\
        B) Blue\n\
        C) Green\n\
        D) Yellow\n\
        Answer: B\n\n\
        Q2: Which planet is known as the red planet?\n\
        A. Venus\n\
        B. Mars\n\
        C. Jupiter\n\
        D. Saturn\n\
        Answer: The red planet is Mars";

    let mcqs = recover_mcqs(transcript, DEFAULT_MIN_OPTIONS);

    assert_eq!(mcqs.len(), 2);
    assert_eq!(mcqs[0].options, vec!["Red", "Blue", "Green", "Yellow"]);
    assert_eq!(mcqs[0].answer, "Blue");
    assert_eq!(mcqs[1].answer, "Mars");
}

#[test]
fn partially_valid_json_batch_keeps_only_good_records() {
    let transcript = r#"[
  {"question": "Good question?", "options": ["a", "b", "c", "d"], "answer": "c"},
  {"question": "Too few options?", "options": ["a", "b"], "answer": "a"},
  {"question": "Good question?", "options": ["e", "f", "g", "h"], "answer": "e"},
  {"question": "Answer drift?", "options": ["w", "x", "y", "z"], "answer": "W"}
]"#;

    let mcqs = recover_mcqs(transcript, DEFAULT_MIN_OPTIONS);

    assert_eq!(mcqs.len(), 1);
    assert_eq!(mcqs[0].question, "Good question?");
    assert_eq!(mcqs[0].answer, "c");
}

#[test]
fn total_failure_leaves_placeholder_substitution_to_the_caller() {
    let mcqs = recover_mcqs("The model refused to answer.", DEFAULT_MIN_OPTIONS);
    assert!(mcqs.is_empty());

    let quiz = if mcqs.is_empty() { placeholder_quiz() } else { mcqs };
    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz[0].options, vec!["N/A", "N/A", "N/A", "N/A"]);
    assert_eq!(quiz[0].answer, "N/A");
}

#[test]
fn relaxed_option_floor_is_honoured_end_to_end() {
    let transcript = "Q1) True or false: Rust has a garbage collector?\n\
        A) True\n\
        B) False\n\
        Answer: B";

    assert!(recover_mcqs(transcript, DEFAULT_MIN_OPTIONS).is_empty());

    let relaxed = recover_mcqs(transcript, 2);
    assert_eq!(relaxed.len(), 1);
    assert_eq!(relaxed[0].answer, "False");
}

#[test]
fn line_recovery_answer_is_text_not_label() {
    let transcript = "Q1) Pick the borrow checker's job\n\
        A) Garbage collection\n\
        B) Compile-time aliasing rules\n\
        C) Runtime bounds checks\n\
        D) Thread scheduling\n\
        Answer: B";

    let mcqs = recover_mcqs(transcript, DEFAULT_MIN_OPTIONS);

    assert_eq!(mcqs.len(), 1);
    assert_eq!(mcqs[0].answer, "Compile-time aliasing rules");
}

#[test]
fn validator_is_reusable_across_batches() {
    use skillmint_server::parsing::CandidateMcq;

    let candidate = CandidateMcq {
        question: "What is X?".to_string(),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        answer: "a".to_string(),
    };

    let first = validate_mcqs(vec![candidate.clone()], DEFAULT_MIN_OPTIONS);
    let second = validate_mcqs(vec![candidate], DEFAULT_MIN_OPTIONS);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn outline_recovery_across_formats_with_reasoning_noise() {
    let transcript = "<think>\nPlan: three lessons, escalating difficulty.\n</think>\n\
        Here's a solid outline:\n\n\
        Lesson 1. Variables in Python\n\
        Learn about strings, integers, and floats.\n\
        Lesson 2. Control Flow in Python\n\
        Master if-statements and loops.\n\n\
        That's the outline, enjoy!";

    let normalized = strip_reasoning(transcript);
    let entries = parse_outline(&normalized);

    assert_eq!(
        entries,
        vec![
            OutlineEntry {
                title: "Variables in Python".to_string(),
                summary: "Learn about strings, integers, and floats.".to_string(),
            },
            OutlineEntry {
                title: "Control Flow in Python".to_string(),
                summary: "Master if-statements and loops.".to_string(),
            },
        ]
    );
}

#[test]
fn empty_outline_is_reported_as_empty_not_an_error() {
    assert!(parse_outline("").is_empty());
    assert!(parse_outline("   \n\t\n").is_empty());
    assert!(parse_outline("just some chatter, no lessons anywhere").is_empty());
}

#[test]
fn normalization_is_idempotent_over_the_whole_pipeline_input() {
    let transcript = "intro <think>one</think> middle <think>two\nlines</think> end";

    let once = strip_reasoning(transcript);
    let twice = strip_reasoning(&once);

    assert_eq!(once, twice);
    assert_eq!(once, "intro  middle  end");
}
