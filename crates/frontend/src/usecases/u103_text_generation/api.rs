use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u103_text_generation::{
    TextGeneration, TextGenerationRequest, TextGenerationResponse,
};

use crate::shared::api_call::call_api_latest;
use crate::shared::api_client::ApiClient;
use crate::shared::banner::Banner;
use crate::shared::request_tracker::RequestTracker;

/// Параметры генерации, собранные из формы
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationForm {
    pub prompt: String,
    pub max_length: u32,
    /// `None` leaves the backend default in place
    pub temperature: Option<f32>,
}

pub fn build_request(form: &GenerationForm) -> Option<TextGenerationRequest> {
    let prompt = form.prompt.trim();
    if prompt.is_empty() {
        return None;
    }
    Some(TextGenerationRequest {
        prompt: prompt.to_string(),
        max_length: form.max_length,
        temperature: form.temperature,
    })
}

/// Returns the generated text verbatim
pub async fn generate_text<B: Banner + ?Sized>(
    client: &ApiClient,
    banner: &B,
    tracker: &RequestTracker,
    form: &GenerationForm,
) -> Option<String> {
    let request = build_request(form)?;
    let response: TextGenerationResponse = call_api_latest(
        client,
        banner,
        tracker,
        TextGeneration::endpoint(),
        &request,
    )
    .await?;
    Some(response.generated_text)
}
