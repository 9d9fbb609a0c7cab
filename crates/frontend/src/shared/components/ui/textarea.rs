use super::frame::{FieldFrame, FrameState};
use leptos::prelude::*;

const DEFAULT_ROWS: u32 = 4;

/// Multi-line counterpart of [`super::Input`]
#[component]
pub fn Textarea(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let frame = FrameState::new(error, class);
    let control_id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <FieldFrame control_id=control_id label=label error=error required=required>
            <textarea
                id=move || control_id.get()
                class=move || frame.class("form__textarea")
                aria-invalid=move || frame.invalid().to_string()
                rows=rows.unwrap_or(DEFAULT_ROWS)
                placeholder=move || placeholder.get()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </FieldFrame>
    }
}
