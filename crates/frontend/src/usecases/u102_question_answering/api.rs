use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_question_answering::{
    QuestionAnswering, QuestionAnsweringRequest, QuestionAnsweringResponse,
};

use crate::shared::api_call::call_api_latest;
use crate::shared::api_client::ApiClient;
use crate::shared::banner::Banner;
use crate::shared::request_tracker::RequestTracker;

/// Оба поля обязательны после trim
pub fn build_request(context: &str, question: &str) -> Option<QuestionAnsweringRequest> {
    let context = context.trim();
    let question = question.trim();
    if context.is_empty() || question.is_empty() {
        return None;
    }
    Some(QuestionAnsweringRequest {
        context: context.to_string(),
        question: question.to_string(),
    })
}

/// Returns the backend's answer verbatim
pub async fn answer_question<B: Banner + ?Sized>(
    client: &ApiClient,
    banner: &B,
    tracker: &RequestTracker,
    context: &str,
    question: &str,
) -> Option<String> {
    let request = build_request(context, question)?;
    let response: QuestionAnsweringResponse = call_api_latest(
        client,
        banner,
        tracker,
        QuestionAnswering::endpoint(),
        &request,
    )
    .await?;
    Some(response.answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::banner::BannerState;
    use crate::shared::testing::ScriptedTransport;
    use std::cell::RefCell;

    const CONTEXT: &str = "La tour Eiffel a été construite en 1889 à Paris.";

    #[test]
    fn test_build_request_requires_both_fields() {
        assert_eq!(build_request(CONTEXT, "  "), None);
        assert_eq!(build_request("", "Quand ?"), None);

        let request = build_request(&format!(" {} ", CONTEXT), " Quand ? ").unwrap();
        assert_eq!(request.context, CONTEXT);
        assert_eq!(request.question, "Quand ?");
    }

    #[tokio::test]
    async fn test_answer_is_rendered_verbatim() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"answer":"  en 1889 "}"#);
        let client = ApiClient::new("http://api", transport.clone());
        let banner = RefCell::new(BannerState::default());

        let output = answer_question(
            &client,
            &banner,
            &RequestTracker::new(),
            CONTEXT,
            "Quand a-t-elle été construite ?",
        )
        .await;

        assert_eq!(output.as_deref(), Some("  en 1889 "));
        assert_eq!(transport.calls()[0].url, "http://api/predict/qa");
    }

    #[tokio::test]
    async fn test_missing_question_makes_no_call() {
        let transport = ScriptedTransport::new();
        let client = ApiClient::new("http://api", transport.clone());
        let banner = RefCell::new(BannerState::default());

        let output =
            answer_question(&client, &banner, &RequestTracker::new(), CONTEXT, "\n").await;

        assert_eq!(output, None);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_response_without_answer_is_an_error() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"score":0.5}"#);
        let client = ApiClient::new("http://api", transport);
        let banner = RefCell::new(BannerState::default());

        let output =
            answer_question(&client, &banner, &RequestTracker::new(), CONTEXT, "Où ?").await;

        assert_eq!(output, None);
        let state = banner.borrow();
        assert!(state
            .error()
            .is_some_and(|message| message.starts_with("Erreur de communication avec l'API: ")));
        assert!(!state.is_loading());
    }
}
