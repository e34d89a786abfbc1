pub mod request;
pub mod response;

pub use request::QuestionAnsweringRequest;
pub use response::QuestionAnsweringResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct QuestionAnswering;

impl UseCaseMetadata for QuestionAnswering {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "question_answering"
    }

    fn display_name() -> &'static str {
        "Question-Réponse"
    }

    fn endpoint() -> &'static str {
        "/predict/qa"
    }

    fn description() -> &'static str {
        "Extrait du contexte fourni la réponse à une question"
    }
}
