use crate::shared::i18n::{use_locale, LanguageSelect, TextKey};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();

    let nav = [
        ("/", "home", TextKey::NavHome),
        ("/report", "plus-circle", TextKey::NavNewClaim),
        ("/track", "search", TextKey::NavTrackClaim),
    ];

    view! {
        <header data-zone="header" class="top-header">
            <A href="/" attr:class="top-header__brand">
                <span class="top-header__logo">{icon("car")}</span>
                <span class="top-header__titles">
                    <span class="top-header__title">{move || locale.t(TextKey::AppTitle)}</span>
                    <span class="top-header__subtitle">{move || locale.t(TextKey::AppSubtitle)}</span>
                </span>
            </A>

            <nav class="top-header__nav">
                {nav.into_iter().map(|(href, icon_name, key)| view! {
                    <A href=href attr:class="top-header__link">
                        {icon(icon_name)}
                        <span>{move || locale.t(key)}</span>
                    </A>
                }).collect_view()}
            </nav>

            <LanguageSelect />
        </header>
    }
}
