use super::frame::{FieldFrame, FrameState};
use leptos::prelude::*;

/// Single-line input inside a [`FieldFrame`].
///
/// `input_type` defaults to `text`. `max` and `step` pass straight through
/// to the element for date and number inputs.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] max: MaybeProp<String>,
    #[prop(optional, into)] step: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let frame = FrameState::new(error, class);
    let control_id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <FieldFrame control_id=control_id label=label hint=hint error=error required=required>
            <input
                id=move || control_id.get()
                type=move || input_type.get().unwrap_or_else(|| "text".into())
                class=move || frame.class("form__input")
                aria-invalid=move || frame.invalid().to_string()
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                autocomplete=move || autocomplete.get()
                max=move || max.get()
                step=move || step.get()
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
        </FieldFrame>
    }
}
