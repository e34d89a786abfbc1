use crate::layout::tabs::TabBar;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Interface NLP"</span>
                <span class="header__subtitle">
                    "Analyse de sentiment, question-réponse et génération de texte"
                </span>
            </div>
            <TabBar />
        </header>
    }
}
