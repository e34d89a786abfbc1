use super::TabId;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Row of tab links, one per `TabId`
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="tabs">
            {TabId::ALL
                .into_iter()
                .map(move |tab| {
                    view! {
                        <button
                            type="button"
                            class="tab-link"
                            class:active=move || ctx.tabs.with(|state| state.is_link_active(tab))
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Content panel shown only while `tab` is the active one
#[component]
pub fn TabPanel(tab: TabId, children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section
            id=tab.panel_id()
            class="tab-content"
            style:display=move || {
                if ctx.tabs.with(|state| state.is_panel_visible(tab)) { "block" } else { "none" }
            }
        >
            {children()}
        </section>
    }
}
