use leptos::prelude::*;

/// Label, control slot and the message line under it.
///
/// The message line shows `error` when present, otherwise `hint`.
/// Controls read `invalid` through [`FrameState`] to set their own
/// modifier class and `aria-invalid`.
#[component]
pub fn FieldFrame(
    #[prop(into)] control_id: Signal<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let label_class = if required {
        "form__label form__label--required"
    } else {
        "form__label"
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class=label_class for=move || control_id.get()>{text}</label>
            })}
            {children()}
            {move || {
                if let Some(message) = error.get() {
                    view! { <div class="form__error" role="alert">{message}</div> }.into_any()
                } else {
                    hint.get()
                        .map(|text| view! { <div class="form__hint">{text}</div> })
                        .into_any()
                }
            }}
        </div>
    }
}

/// Validation-derived attributes shared by every framed control
#[derive(Clone, Copy)]
pub struct FrameState {
    error: MaybeProp<String>,
    extra: MaybeProp<String>,
}

impl FrameState {
    pub fn new(error: MaybeProp<String>, extra: MaybeProp<String>) -> Self {
        Self { error, extra }
    }

    pub fn invalid(&self) -> bool {
        self.error.get().is_some()
    }

    /// `base` plus the invalid modifier and any caller classes
    pub fn class(&self, base: &str) -> String {
        let mut class = base.to_string();
        if self.invalid() {
            class.push_str(" form__input--invalid");
        }
        if let Some(extra) = self.extra.get().filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(&extra);
        }
        class
    }
}
