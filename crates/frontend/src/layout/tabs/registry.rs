use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_sentiment_analysis::SentimentAnalysis;
use contracts::usecases::u102_question_answering::QuestionAnswering;
use contracts::usecases::u103_text_generation::TextGeneration;

/// Статический набор вкладок приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Sentiment,
    QuestionAnswering,
    TextGeneration,
}

impl TabId {
    /// Tabs in display order
    pub const ALL: [TabId; 3] = [
        TabId::Sentiment,
        TabId::QuestionAnswering,
        TabId::TextGeneration,
    ];

    /// Key used in element ids and in the `?active=` query
    pub fn key(&self) -> &'static str {
        match self {
            TabId::Sentiment => "sentiment",
            TabId::QuestionAnswering => "qa",
            TabId::TextGeneration => "generate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Sentiment => SentimentAnalysis::display_name(),
            TabId::QuestionAnswering => QuestionAnswering::display_name(),
            TabId::TextGeneration => TextGeneration::display_name(),
        }
    }

    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip_and_unknown_keys() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_key(tab.key()), Some(tab));
        }
        assert_eq!(TabId::from_key("translate"), None);
        assert_eq!(TabId::from_key(""), None);
    }

    #[test]
    fn test_titles_come_from_usecase_metadata() {
        assert_eq!(TabId::QuestionAnswering.title(), "Question-Réponse");
        assert_eq!(TabId::TextGeneration.panel_id(), "generate-tab");
    }
}
