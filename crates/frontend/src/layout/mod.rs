pub mod footer;
pub mod global_context;
pub mod header;
pub mod tabs;

use crate::shared::components::StatusBanner;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (title + tab links)        |
/// +------------------------------------------+
/// |        StatusBanner (loading/error)      |
/// +------------------------------------------+
/// |        Tab panels (children)             |
/// +------------------------------------------+
/// |        Footer (backend status)           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <StatusBanner />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
