use super::api::{self, GenerationForm};
use crate::usecases::usecase_dom_id;
use crate::config::Config;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::components::ui::{Button, RangeSlider, Textarea};
use crate::shared::request_tracker::RequestTracker;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u103_text_generation::TextGeneration;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TextGenerationView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let client = use_context::<ApiClient>().expect("ApiClient context not found");
    let config = use_context::<Config>().expect("Config context not found");
    let length_bounds = config.generation.max_length;
    let temperature_bounds = config.generation.temperature;
    let tracker = RequestTracker::new();

    let (prompt, set_prompt) = signal(String::new());
    let (max_length, set_max_length) = signal(length_bounds.default);
    // Температура отправляется только при включённом переопределении
    let (override_temperature, set_override_temperature) = signal(false);
    let (temperature, set_temperature) = signal(temperature_bounds.default);
    let (output, set_output) = signal(String::new());

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let client = client.clone();
        let tracker = tracker.clone();
        let banner = ctx.banner;
        let form = GenerationForm {
            prompt: prompt.get_untracked(),
            max_length: max_length.get_untracked(),
            temperature: override_temperature
                .get_untracked()
                .then(|| temperature.get_untracked()),
        };

        spawn_local(async move {
            if let Some(text) = api::generate_text(&client, &banner, &tracker, &form).await {
                set_output.set(text);
            }
        });
    });

    let dom_id = usecase_dom_id::<TextGeneration>();

    view! {
        <div id=dom_id class="usecase">
            <h2>{TextGeneration::display_name()}</h2>
            <p class="usecase__description">{TextGeneration::description()}</p>
            <Textarea
                id="generate-prompt"
                label="Amorce (prompt)"
                placeholder="Écrivez le début du texte à générer..."
                rows=5
                value=prompt
                on_input=Callback::new(move |value: String| set_prompt.set(value))
            />
            <RangeSlider
                id="max-length"
                label="Longueur max :"
                bounds=length_bounds
                value=max_length
                on_input=Callback::new(move |value: u32| set_max_length.set(value))
            />
            <details class="usecase__advanced">
                <summary>"Paramètres avancés"</summary>
                <label class="form__label">
                    <input
                        type="checkbox"
                        prop:checked=move || override_temperature.get()
                        on:change=move |ev| set_override_temperature.set(event_target_checked(&ev))
                    />
                    " Température (créativité) : "
                    <span class="range__value">{move || format!("{:.1}", temperature.get())}</span>
                </label>
                <input
                    type="range"
                    id="temperature"
                    class="form__range"
                    min=temperature_bounds.min
                    max=temperature_bounds.max
                    step=temperature_bounds.step
                    disabled=move || !override_temperature.get()
                    prop:value=move || temperature.get().to_string()
                    on:input=move |ev| {
                        set_temperature.set(temperature_bounds.parse(&event_target_value(&ev)))
                    }
                />
            </details>
            <Button id="generate-btn" on_click=on_submit>
                "Générer le texte"
            </Button>
            <pre id="generate-output" class="usecase__output">{move || output.get()}</pre>
        </div>
    }
}
