use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Путь корневого документа API
pub const API_INDEX_PATH: &str = "/";

/// Приветственный документ, который бэкенд отдаёт на `GET /`.
///
/// `endpoints` maps a feature name to a "METHOD /path" description,
/// e.g. `"sentiment_analysis" -> "POST /predict/sentiment"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    #[serde(default)]
    pub endpoints: IndexMap<String, String>,
}

impl ApiIndex {
    /// Проверяет, что бэкенд объявляет указанный путь
    pub fn declares(&self, path: &str) -> bool {
        self.endpoints
            .values()
            .any(|description| description.split_whitespace().last() == Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_matches_path_suffix() {
        let index: ApiIndex = serde_json::from_str(
            r#"{
                "message": "Bienvenue sur l'API de modèles NLP.",
                "endpoints": {
                    "sentiment_analysis": "POST /predict/sentiment",
                    "question_answering": "POST /predict/qa",
                    "text_generation": "POST /predict/generate"
                }
            }"#,
        )
        .unwrap();

        assert!(index.declares("/predict/qa"));
        assert!(!index.declares("/predict"));
        assert_eq!(
            index.endpoints.keys().next().map(String::as_str),
            Some("sentiment_analysis")
        );
    }

    #[test]
    fn test_endpoints_default_to_empty() {
        let index: ApiIndex = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(index.endpoints.is_empty());
    }
}
