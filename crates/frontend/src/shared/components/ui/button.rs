use leptos::prelude::*;

/// Primary action button
#[component]
pub fn Button(
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=move || id.get().unwrap_or_default()
            class="button button--primary"
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
