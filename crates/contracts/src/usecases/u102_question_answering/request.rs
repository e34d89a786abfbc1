use serde::{Deserialize, Serialize};

/// Запрос question-answering: контекст и вопрос к нему
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnsweringRequest {
    pub context: String,
    pub question: String,
}
