use serde::{Deserialize, Serialize};

/// Запрос на анализ тональности текста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}
