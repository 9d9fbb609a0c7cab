use leptos::prelude::*;

/// Yes/no toggle with the label to its right
#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let control_id = move || id.get().unwrap_or_default();

    view! {
        <label class="form__checkbox" for=control_id>
            <input
                id=control_id
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_checked(&ev));
                    }
                }
            />
            <span>{move || label.get()}</span>
        </label>
    }
}
