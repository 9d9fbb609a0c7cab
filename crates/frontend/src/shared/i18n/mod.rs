//! Locale management for the application.
//!
//! `LocaleService` is created once by `App` and handed down through context.
//! The chosen language is persisted in localStorage and mirrored onto the
//! `lang` and `dir` attributes of `<html>`.

pub mod catalog;
pub mod language_select;

pub use catalog::{fill, translate, TextKey};
pub use language_select::LanguageSelect;

use contracts::enums::{LanguageCode, TextDirection};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

pub const LANGUAGE_STORAGE_KEY: &str = "fnol_language";
const LANGUAGE_QUERY_PARAM: &str = "lng";

/// Active language together with its writing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub language: LanguageCode,
    pub direction: TextDirection,
}

impl Locale {
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            direction: language.direction(),
        }
    }

    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.language, key)
    }
}

/// Resolve a language tag; unknown tags become English, left-to-right
pub fn resolve(code: &str) -> Locale {
    Locale::new(LanguageCode::from_code(code).unwrap_or_default())
}

/// Pick the initial language: URL query, stored choice, browser, then default
pub fn detect_language(
    query: Option<&str>,
    stored: Option<&str>,
    navigator: Option<&str>,
    default: LanguageCode,
) -> LanguageCode {
    [query, stored, navigator]
        .into_iter()
        .flatten()
        .find_map(LanguageCode::from_code)
        .unwrap_or(default)
}

/// Value of `?lng=` in a location search string
pub fn language_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(LANGUAGE_QUERY_PARAM).cloned()
}

fn load_language_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
}

fn save_language_to_storage(language: LanguageCode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.code());
    }
}

/// Read every detection source available in the browser
pub fn detect_browser_language(default: LanguageCode) -> LanguageCode {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query = language_from_query(&search);
    let stored = load_language_from_storage();
    let navigator = window().and_then(|w| w.navigator().language());

    detect_language(
        query.as_deref(),
        stored.as_deref(),
        navigator.as_deref(),
        default,
    )
}

/// Set `lang` and `dir` on the document element
fn apply_locale_to_document(locale: Locale) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(el) => el,
        None => return,
    };
    let _ = root.set_attribute("lang", locale.language.code());
    let _ = root.set_attribute("dir", locale.direction.as_str());
}

/// Locale context shared by every view.
#[derive(Clone, Copy)]
pub struct LocaleService {
    pub language: RwSignal<LanguageCode>,
}

impl LocaleService {
    /// Service for the language found by [`detect_browser_language`]; applies it to the document
    pub fn from_browser(default: LanguageCode) -> Self {
        let language = detect_browser_language(default);
        log::debug!("initial language: {}", language.code());
        save_language_to_storage(language);
        apply_locale_to_document(Locale::new(language));
        Self {
            language: RwSignal::new(language),
        }
    }

    /// Current locale (tracked)
    pub fn locale(&self) -> Locale {
        Locale::new(self.language.get())
    }

    /// Translate with the current language (tracked)
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.language.get(), key)
    }

    /// Switch language, persist the choice and update the document direction
    pub fn set_language(&self, language: LanguageCode) {
        if self.language.get_untracked() == language {
            return;
        }
        log::info!("language changed to {}", language.code());
        self.language.set(language);
        save_language_to_storage(language);
        apply_locale_to_document(Locale::new(language));
    }
}

/// Hook to use the locale context.
pub fn use_locale() -> LocaleService {
    use_context::<LocaleService>().expect("LocaleService not found. Provide it in App.")
}
