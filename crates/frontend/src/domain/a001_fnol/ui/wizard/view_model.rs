use crate::domain::a001_fnol::api;
use crate::domain::a001_fnol::labels::{error_args, error_key};
use crate::domain::a001_fnol::state::{
    create_state, AdvanceOutcome, WizardAction, WizardState, WizardStep,
};
use crate::shared::i18n::{fill, translate, use_locale, LocaleService, TextKey};
use contracts::domain::a001_fnol::DraftField;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the claim wizard
#[derive(Clone, Copy)]
pub struct WizardViewModel {
    pub state: RwSignal<WizardState>,
    pub locale: LocaleService,
}

impl WizardViewModel {
    pub fn new() -> Self {
        Self {
            state: create_state(),
            locale: use_locale(),
        }
    }

    pub fn dispatch(&self, action: WizardAction) {
        self.state.update(|s| s.update(action));
    }

    pub fn step(&self) -> WizardStep {
        self.state.with(|s| s.step)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    /// Field value as shown by its widget; only notifies when the text changes
    pub fn field_value(&self, field: DraftField) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| field.value_of(&s.draft)))
    }

    pub fn field_flag(&self, field: DraftField) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| field.flag_of(&s.draft).unwrap_or(false)))
    }

    /// Translated error text for `field`, if it failed validation
    pub fn field_error(&self, field: DraftField) -> Option<String> {
        let error = self.state.with(|s| s.error_for(field))?;
        let args = error_args(&error);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Some(fill(self.locale.t(error_key(&error)), &args))
    }

    pub fn next_command(&self) {
        let outcome = self.state.try_update(|s| s.advance());
        match outcome {
            Some(AdvanceOutcome::Advanced(step)) => {
                log::debug!("wizard: advanced to {:?}", step);
                scroll_to_top();
            }
            Some(AdvanceOutcome::Blocked(errors)) => {
                log::debug!("wizard: step blocked by {} field(s)", errors.len());
            }
            Some(AdvanceOutcome::AtEnd) | None => {}
        }
    }

    pub fn back_command(&self) {
        self.state.update(|s| s.retreat());
        log::debug!("wizard: back to {:?}", self.state.with_untracked(|s| s.step));
        scroll_to_top();
    }

    /// Submit the draft; `on_submitted` receives the confirmation route
    pub fn submit_command<F>(&self, on_submitted: F)
    where
        F: Fn(String) + 'static,
    {
        let language = self.locale.language.get_untracked();
        let ticket = match self.state.try_update(|s| s.begin_submission(language)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(rejected)) => {
                log::debug!("wizard: submission not started: {}", rejected);
                return;
            }
            None => return,
        };

        let state = self.state;
        let fallback = translate(language, TextKey::SubmitFailed);
        spawn_local(async move {
            let result = api::submit_fnol(&ticket.request, ticket.idempotency_key).await;
            let route = state
                .try_update(|s| s.complete_submission(result, fallback))
                .flatten();
            if let Some(route) = route {
                on_submitted(route);
            }
        });
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
