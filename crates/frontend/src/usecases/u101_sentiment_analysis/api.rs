use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_sentiment_analysis::{
    SentimentAnalysis, SentimentRequest, SentimentResponse,
};

use crate::shared::api_call::call_api_latest;
use crate::shared::api_client::ApiClient;
use crate::shared::banner::Banner;
use crate::shared::number_format::format_fixed;
use crate::shared::request_tracker::RequestTracker;

/// Запрос из введённого текста; `None` для пустого ввода
pub fn build_request(text: &str) -> Option<SentimentRequest> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(SentimentRequest {
        text: text.to_string(),
    })
}

/// One `"label: score"` line per label, score with 4 decimals, backend order
pub fn format_prediction(response: &SentimentResponse) -> String {
    response
        .prediction
        .iter()
        .map(|(label, score)| format!("{}: {}", label, format_fixed(*score, 4)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Анализ тональности: текст для вывода или `None`, если выводить нечего
pub async fn analyze_sentiment<B: Banner + ?Sized>(
    client: &ApiClient,
    banner: &B,
    tracker: &RequestTracker,
    text: &str,
) -> Option<String> {
    let request = build_request(text)?;
    let response: SentimentResponse = call_api_latest(
        client,
        banner,
        tracker,
        SentimentAnalysis::endpoint(),
        &request,
    )
    .await?;
    Some(format_prediction(&response))
}
