use crate::config::SliderConfig;
use leptos::prelude::*;

/// Text shown next to a range control for `value`
pub fn slider_label(value: u32) -> String {
    value.to_string()
}

/// Integer range input whose label mirrors the value on every `input` event.
///
/// Dragging only runs `on_input` with the parsed value; the component holds
/// no `ApiClient`, so moving the slider never issues a request.
#[component]
pub fn RangeSlider(
    #[prop(into)]
    label: String,
    #[prop(into)]
    id: String,
    bounds: SliderConfig,
    #[prop(into)]
    value: Signal<u32>,
    on_input: Callback<u32>,
) -> impl IntoView {
    let label_for = id.clone();
    let value_id = format!("{}-value", id);

    view! {
        <div class="form__group form__group--range">
            <label class="form__label" for=label_for>
                {label}
                " "
                <span id=value_id class="range__value">
                    {move || slider_label(value.get())}
                </span>
            </label>
            <input
                type="range"
                id=id
                class="form__range"
                min=bounds.min
                max=bounds.max
                step=bounds.step
                prop:value=move || value.get().to_string()
                on:input=move |ev| on_input.run(bounds.parse(&event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    // Same path as the `input` handler: parse, then render the label.
    #[test]
    fn test_label_mirrors_dragged_value() {
        let bounds = Config::default().generation.max_length;
        assert_eq!(slider_label(bounds.parse("150")), "150");
        assert_eq!(slider_label(bounds.default), "50");
    }
}
