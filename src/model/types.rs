use serde::{Deserialize, Serialize};

/// Result of one extractive question-answering call. Only `answer` is
/// surfaced to API callers; `score` is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub score: Option<f32>,
}
