use crate::shared::i18n::{use_locale, TextKey};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="page not-found">
            <h1>{move || locale.t(TextKey::NotFoundTitle)}</h1>
            <p>{move || locale.t(TextKey::NotFoundBody)}</p>
            <A href="/" attr:class="button button--primary">{move || locale.t(TextKey::NavHome)}</A>
        </div>
    }
}
