use super::api;
use crate::usecases::usecase_dom_id;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::request_tracker::RequestTracker;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_sentiment_analysis::SentimentAnalysis;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SentimentAnalysisView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let client = use_context::<ApiClient>().expect("ApiClient context not found");
    let tracker = RequestTracker::new();

    let (text, set_text) = signal(String::new());
    let (output, set_output) = signal(String::new());

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let client = client.clone();
        let tracker = tracker.clone();
        let banner = ctx.banner;
        let input = text.get_untracked();

        spawn_local(async move {
            // `None` keeps the previous output
            if let Some(rendered) = api::analyze_sentiment(&client, &banner, &tracker, &input).await
            {
                set_output.set(rendered);
            }
        });
    });

    let dom_id = usecase_dom_id::<SentimentAnalysis>();

    view! {
        <div id=dom_id class="usecase">
            <h2>{SentimentAnalysis::display_name()}</h2>
            <p class="usecase__description">{SentimentAnalysis::description()}</p>
            <Textarea
                id="sentiment-input"
                label="Texte à analyser"
                placeholder="Collez votre texte ici..."
                rows=6
                value=text
                on_input=Callback::new(move |value: String| set_text.set(value))
            />
            <Button id="sentiment-btn" on_click=on_submit>
                "Analyser le sentiment"
            </Button>
            <pre id="sentiment-output" class="usecase__output">{move || output.get()}</pre>
        </div>
    }
}
