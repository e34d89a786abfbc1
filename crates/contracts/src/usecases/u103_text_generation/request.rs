use serde::{Deserialize, Serialize};

/// Запрос генерации текста.
///
/// `temperature` is omitted from the body when unset so the backend applies
/// its own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    pub prompt: String,
    pub max_length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_temperature_omitted_when_unset() {
        let request = TextGenerationRequest {
            prompt: "Il était une fois".to_string(),
            max_length: 150,
            temperature: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "Il était une fois", "max_length": 150})
        );
    }

    #[test]
    fn test_temperature_sent_when_set() {
        let request = TextGenerationRequest {
            prompt: "Once".to_string(),
            max_length: 50,
            temperature: Some(0.5),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], json!(0.5));
        assert!(value["max_length"].is_u64());
    }
}
