use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant {
        Some("secondary") => "button--secondary",
        Some("ghost") => "button--ghost",
        _ => "button--primary",
    }
}

/// Action button.
///
/// `variant` is `primary` (default), `secondary` or `ghost`; `size="sm"`
/// selects the compact form. While `busy` is set the button is disabled and
/// announces `aria-busy`, so a pending submit cannot be sent twice.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] busy: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let busy = move || busy.get().unwrap_or(false);
    let classes = move || {
        let mut classes = format!("button {}", variant_class(variant.get().as_deref()));
        if size.get().as_deref() == Some("sm") {
            classes.push_str(" button--small");
        }
        if let Some(extra) = class.get() {
            classes.push(' ');
            classes.push_str(&extra);
        }
        classes
    };

    view! {
        <button
            type="button"
            class=classes
            disabled=move || busy() || disabled.get().unwrap_or(false)
            aria-busy=move || busy().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_falls_back_to_primary() {
        assert_eq!(variant_class(None), "button--primary");
        assert_eq!(variant_class(Some("danger")), "button--primary");
        assert_eq!(variant_class(Some("ghost")), "button--ghost");
    }
}
