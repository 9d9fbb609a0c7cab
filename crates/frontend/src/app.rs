use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::shared::i18n::LocaleService;
use contracts::enums::LanguageCode;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let default_language =
        LanguageCode::from_code(&config().ui.default_language).unwrap_or_default();

    // Provide the locale to the whole app via context.
    provide_context(LocaleService::from_browser(default_language));

    view! {
        <AppRoutes />
    }
}
