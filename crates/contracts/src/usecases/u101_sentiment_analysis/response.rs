use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ответ анализа тональности: label -> score.
///
/// Order of labels is the order the backend wrote them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub prediction: IndexMap<String, f64>,
}
