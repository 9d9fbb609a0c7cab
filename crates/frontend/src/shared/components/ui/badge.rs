use leptos::prelude::*;

/// Inline pill for status values.
///
/// Status tables carry their own palette, so `color` and `bg_color` win over
/// the variant's default colours when set.
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] color: MaybeProp<String>,
    #[prop(optional, into)] bg_color: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = match variant.get().as_deref() {
            Some(v @ ("primary" | "success" | "warning" | "error")) => v.to_string(),
            _ => "neutral".to_string(),
        };
        format!("badge badge--{}", variant)
    };
    let style = move || {
        [("color", color.get()), ("background-color", bg_color.get())]
            .into_iter()
            .filter_map(|(property, value)| value.map(|v| format!("{}: {};", property, v)))
            .collect::<String>()
    };

    view! {
        <span class=class style=style>{children()}</span>
    }
}
