use crate::layout::tabs::{TabId, TabState};
use crate::shared::banner::BannerState;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// App-wide UI state: which panel is shown and the shared banner
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabState>,
    pub banner: RwSignal<BannerState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabState::default()),
            banner: RwSignal::new(BannerState::default()),
        }
    }

    pub fn select_tab(&self, tab: TabId) {
        log::debug!("select_tab: {}", tab.key());
        self.tabs.update(|state| state.select(tab));
    }

    /// Restores the active tab from `?active=<key>` and keeps the query in
    /// sync with later selections.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("active") {
            match TabId::from_key(key) {
                Some(tab) => self.select_tab(tab),
                None => log::warn!("Ignoring unknown tab in URL: '{}'", key),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active) = this.tabs.with(|state| state.active()) else {
                return;
            };

            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
