use crate::config::{load_config, Config};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{TabId, TabPanel};
use crate::layout::Shell;
use crate::shared::api_client::ApiClient;
use crate::usecases::u101_sentiment_analysis::view::SentimentAnalysisView;
use crate::usecases::u102_question_answering::view::QuestionAnsweringView;
use crate::usecases::u103_text_generation::view::TextGenerationView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using built-in defaults: {}", e);
        Config::default()
    });
    log::info!("Inference API base URL: {}", config.api.base_url);

    provide_context(ApiClient::browser(config.api.base_url.clone()));
    provide_context(config);

    // Tabs + banner state shared by the whole app.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Shell>
            <TabPanel tab=TabId::Sentiment>
                <SentimentAnalysisView />
            </TabPanel>
            <TabPanel tab=TabId::QuestionAnswering>
                <QuestionAnsweringView />
            </TabPanel>
            <TabPanel tab=TabId::TextGeneration>
                <TextGenerationView />
            </TabPanel>
        </Shell>
    }
}
