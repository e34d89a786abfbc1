pub mod request;
pub mod response;

pub use request::SentimentRequest;
pub use response::SentimentResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SentimentAnalysis;

impl UseCaseMetadata for SentimentAnalysis {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "sentiment_analysis"
    }

    fn display_name() -> &'static str {
        "Analyse de Sentiment"
    }

    fn endpoint() -> &'static str {
        "/predict/sentiment"
    }

    fn description() -> &'static str {
        "Classifie le sentiment d'un texte et renvoie un score par label"
    }
}
