use crate::shared::api_client::{ApiClient, CommunicationError};
use contracts::shared::api_index::{ApiIndex, API_INDEX_PATH};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_sentiment_analysis::SentimentAnalysis;
use contracts::usecases::u102_question_answering::QuestionAnswering;
use contracts::usecases::u103_text_generation::TextGeneration;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Inference endpoints the UI calls
fn used_endpoints() -> [&'static str; 3] {
    [
        SentimentAnalysis::endpoint(),
        QuestionAnswering::endpoint(),
        TextGeneration::endpoint(),
    ]
}

#[derive(Clone, Debug, PartialEq)]
enum ServerStatus {
    Online {
        /// Welcome message of the API index
        message: String,
        /// Endpoints the UI calls that the index does not declare
        missing: Vec<&'static str>,
    },
    Offline,
    Checking,
}

impl ServerStatus {
    fn from_index_check(result: Result<ApiIndex, CommunicationError>) -> Self {
        match result {
            Ok(index) => {
                // An index without an endpoint list says nothing about coverage
                let missing: Vec<&'static str> = if index.endpoints.is_empty() {
                    Vec::new()
                } else {
                    used_endpoints()
                        .into_iter()
                        .filter(|endpoint| !index.declares(endpoint))
                        .collect()
                };
                if !missing.is_empty() {
                    log::warn!("Inference API does not declare: {}", missing.join(", "));
                }
                ServerStatus::Online {
                    message: index.message,
                    missing,
                }
            }
            Err(err) => {
                log::warn!("Inference API unreachable: {}", err);
                ServerStatus::Offline
            }
        }
    }

    fn display_text(&self) -> String {
        match self {
            ServerStatus::Online { message, missing } => {
                let mut text = if message.is_empty() {
                    "API : en ligne".to_string()
                } else {
                    format!("API : en ligne ({})", message)
                };
                if !missing.is_empty() {
                    text.push_str(&format!("; endpoints absents : {}", missing.join(", ")));
                }
                text
            }
            ServerStatus::Offline => "API : hors ligne".to_string(),
            ServerStatus::Checking => "API : vérification...".to_string(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online { missing, .. } if !missing.is_empty() => "status-checking",
            ServerStatus::Online { .. } => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

/// Status bar querying `GET /` of the inference API once on mount.
///
/// The status check never touches the loading/error banner.
#[component]
pub fn Footer() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient context not found");
    let status = RwSignal::new(ServerStatus::Checking);
    let base_url = client.base_url().to_string();

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let result = client.get::<ApiIndex>(API_INDEX_PATH).await;
            status.set(ServerStatus::from_index_check(result));
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.with(|s| s.css_class())>
                {move || status.with(|s| s.display_text())}
            </span>
            <span class="status-bar__url">{base_url}</span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn index(endpoints: &[(&str, &str)]) -> ApiIndex {
        ApiIndex {
            message: "Bienvenue sur l'API de modèles NLP.".to_string(),
            endpoints: endpoints
                .iter()
                .map(|(name, route)| (name.to_string(), route.to_string()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_status_from_index_check() {
        let online = ServerStatus::from_index_check(Ok(index(&[
            ("sentiment_analysis", "POST /predict/sentiment"),
            ("question_answering", "POST /predict/qa"),
            ("text_generation", "POST /predict/generate"),
        ])));
        assert_eq!(
            online.display_text(),
            "API : en ligne (Bienvenue sur l'API de modèles NLP.)"
        );
        assert_eq!(online.css_class(), "status-online");

        let offline =
            ServerStatus::from_index_check(Err(CommunicationError::Transport("refused".to_string())));
        assert_eq!(offline, ServerStatus::Offline);
        assert_eq!(offline.css_class(), "status-offline");
    }

    #[test]
    fn test_undeclared_endpoints_are_reported() {
        let status = ServerStatus::from_index_check(Ok(index(&[(
            "sentiment_analysis",
            "POST /predict/sentiment",
        )])));

        assert_eq!(
            status,
            ServerStatus::Online {
                message: "Bienvenue sur l'API de modèles NLP.".to_string(),
                missing: vec!["/predict/qa", "/predict/generate"],
            }
        );
        assert!(status
            .display_text()
            .ends_with("; endpoints absents : /predict/qa, /predict/generate"));
    }

    #[test]
    fn test_index_without_endpoint_list_reports_nothing_missing() {
        let status = ServerStatus::from_index_check(Ok(index(&[])));
        assert_eq!(status.css_class(), "status-online");
    }
}
