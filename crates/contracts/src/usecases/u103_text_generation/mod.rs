pub mod request;
pub mod response;

pub use request::TextGenerationRequest;
pub use response::TextGenerationResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct TextGeneration;

impl UseCaseMetadata for TextGeneration {
    fn usecase_index() -> &'static str {
        "u103"
    }

    fn usecase_name() -> &'static str {
        "text_generation"
    }

    fn display_name() -> &'static str {
        "Génération de Texte"
    }

    fn endpoint() -> &'static str {
        "/predict/generate"
    }

    fn description() -> &'static str {
        "Prolonge une amorce de texte avec un modèle génératif"
    }
}
