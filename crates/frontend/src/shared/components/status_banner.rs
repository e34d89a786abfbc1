use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Spinner and error box driven by the shared `BannerState`
#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let banner = ctx.banner;

    view! {
        <div class="banner">
            <div
                id="loading-indicator"
                class="banner__loading"
                class:hidden=move || !banner.with(|state| state.is_loading())
            >
                <span class="spinner"></span>
                <span>"Traitement en cours..."</span>
            </div>
            <div
                id="error-box"
                class="banner__error"
                role="alert"
                class:hidden=move || banner.with(|state| state.error().is_none())
            >
                {move || banner.with(|state| state.error().unwrap_or_default().to_string())}
            </div>
        </div>
    }
}
