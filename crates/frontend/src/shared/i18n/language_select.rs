use super::{use_locale, TextKey};
use contracts::enums::LanguageCode;
use leptos::prelude::*;

/// Header dropdown listing languages by their native names
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let locale = use_locale();
    let is_open = RwSignal::new(false);

    let choose = move |language: LanguageCode| {
        locale.set_language(language);
        is_open.set(false);
    };

    view! {
        <div class="language-select">
            <button
                class="button button--ghost button--small"
                title=move || locale.t(TextKey::Language)
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                {crate::shared::icons::icon("globe")}
                {move || locale.language.get().native_name()}
            </button>

            <Show when=move || is_open.get()>
                <ul class="language-dropdown" role="listbox">
                    {LanguageCode::all().into_iter().map(|language| {
                        let is_active = move || locale.language.get() == language;
                        view! {
                            <li
                                role="option"
                                lang=language.code()
                                dir=language.direction().as_str()
                                aria-selected=move || is_active().to_string()
                                class=move || if is_active() {
                                    "language-dropdown__item language-dropdown__item--active"
                                } else {
                                    "language-dropdown__item"
                                }
                                on:click=move |_| choose(language)
                            >
                                {language.native_name()}
                                <span class="language-dropdown__hint">{language.english_name()}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
