use serde::{Deserialize, Serialize};

/// A validated multiple-choice question: the question is non-empty, every
/// option survived trimming, and the answer matches one option verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}
