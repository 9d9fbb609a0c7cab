use crate::domain::a001_fnol::api;
use crate::domain::a001_fnol::tracking_state::{create_state, TrackingState};
use crate::shared::i18n::{translate, use_locale, LocaleService, TextKey};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the status lookup page
#[derive(Clone, Copy)]
pub struct TrackingViewModel {
    pub state: RwSignal<TrackingState>,
    pub locale: LocaleService,
    /// Last id fetched, so replacing the URL after a search does not fetch again
    last_requested: RwSignal<Option<String>>,
}

impl TrackingViewModel {
    pub fn new() -> Self {
        Self {
            state: create_state(),
            locale: use_locale(),
            last_requested: RwSignal::new(None),
        }
    }

    pub fn set_query(&self, value: String) {
        self.state.update(|s| s.set_query(&value));
    }

    pub fn is_searching(&self) -> bool {
        self.state.with(|s| s.is_searching())
    }

    pub fn can_search(&self) -> bool {
        self.state.with(|s| !s.query.trim().is_empty() && !s.is_searching())
    }

    /// Search for the typed reference; `on_found` receives the id once it resolves
    pub fn search_command<F>(&self, on_found: F)
    where
        F: Fn(String) + 'static,
    {
        if let Some(id) = self.state.try_update(|s| s.begin_search()).flatten() {
            self.fetch(id, on_found);
        }
    }

    /// Search for an id taken from the route, once per distinct id
    pub fn load_from_route(&self, id: String) {
        if self.last_requested.get_untracked().as_deref() == Some(id.trim()) {
            return;
        }
        if let Some(id) = self.state.try_update(|s| s.search_for(&id)).flatten() {
            self.fetch(id, |_| {});
        }
    }

    pub fn dismiss_banner(&self) {
        self.state.update(|s| s.dismiss_banner());
    }

    fn fetch<F>(&self, id: String, on_found: F)
    where
        F: Fn(String) + 'static,
    {
        log::debug!("tracking: looking up {}", id);
        self.last_requested.set(Some(id.clone()));
        let state = self.state;
        let fallback = translate(self.locale.language.get_untracked(), TextKey::TrackingNotFound);
        spawn_local(async move {
            let result = api::fetch_status(&id).await;
            let found = result.is_ok();
            let applied = state
                .try_update(|s| s.resolve(&id, result, fallback))
                .unwrap_or(false);
            if applied && found {
                on_found(id);
            }
        });
    }
}
