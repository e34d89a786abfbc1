pub mod u101_sentiment_analysis;
pub mod u102_question_answering;
pub mod u103_text_generation;

use contracts::usecases::common::UseCaseMetadata;

/// DOM id of a use case root element, e.g. "u101_sentiment_analysis--usecase"
pub fn usecase_dom_id<U: UseCaseMetadata>() -> String {
    format!("{}--usecase", U::full_name())
}
