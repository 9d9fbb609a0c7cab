use super::frame::{FieldFrame, FrameState};
use leptos::prelude::*;

/// Dropdown over `(value, label)` pairs.
///
/// A blank placeholder option is rendered first so an unset value
/// (`""`) shows as empty rather than silently picking the first entry.
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let frame = FrameState::new(error, class);
    let control_id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <FieldFrame control_id=control_id label=label error=error required=required>
            <select
                id=move || control_id.get()
                class=move || frame.class("form__select")
                aria-invalid=move || frame.invalid().to_string()
                required=required
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.with(String::is_empty)>"-"</option>
                <For
                    each=move || options.get()
                    key=|option| option.0.clone()
                    children=move |(code, text)| {
                        let selected = {
                            let code = code.clone();
                            move || value.with(|v| *v == code)
                        };
                        view! { <option value=code selected=selected>{text}</option> }
                    }
                />
            </select>
        </FieldFrame>
    }
}
