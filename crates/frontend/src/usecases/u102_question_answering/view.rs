use super::api;
use crate::usecases::usecase_dom_id;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::request_tracker::RequestTracker;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_question_answering::QuestionAnswering;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn QuestionAnsweringView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let client = use_context::<ApiClient>().expect("ApiClient context not found");
    let tracker = RequestTracker::new();

    let (context, set_context) = signal(String::new());
    let (question, set_question) = signal(String::new());
    let (output, set_output) = signal(String::new());

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let client = client.clone();
        let tracker = tracker.clone();
        let banner = ctx.banner;
        let context = context.get_untracked();
        let question = question.get_untracked();

        spawn_local(async move {
            if let Some(answer) =
                api::answer_question(&client, &banner, &tracker, &context, &question).await
            {
                set_output.set(answer);
            }
        });
    });

    let dom_id = usecase_dom_id::<QuestionAnswering>();

    view! {
        <div id=dom_id class="usecase">
            <h2>{QuestionAnswering::display_name()}</h2>
            <p class="usecase__description">{QuestionAnswering::description()}</p>
            <Textarea
                id="qa-context"
                label="Contexte"
                placeholder="Fournissez le contexte de référence..."
                rows=8
                value=context
                on_input=Callback::new(move |value: String| set_context.set(value))
            />
            <Textarea
                id="qa-question"
                label="Question"
                placeholder="Posez votre question sur le contexte..."
                rows=2
                value=question
                on_input=Callback::new(move |value: String| set_question.set(value))
            />
            <Button id="qa-btn" on_click=on_submit>
                "Trouver la réponse"
            </Button>
            <pre id="qa-output" class="usecase__output">{move || output.get()}</pre>
        </div>
    }
}
