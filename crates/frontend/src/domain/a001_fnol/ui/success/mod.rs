use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::ui::Button;
use crate::shared::i18n::{use_locale, TextKey};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

const COPIED_RESET_MS: u32 = 2000;

/// Confirmation shown after a claim is accepted
#[component]
pub fn SuccessPage() -> impl IntoView {
    let locale = use_locale();
    let params = use_params_map();
    let fnol_id = Memo::new(move |_| params.read().get("fnol_id").unwrap_or_default());
    let copied = RwSignal::new(false);

    let copy = move |_: leptos::ev::MouseEvent| {
        let id = fnol_id.get_untracked();
        copy_to_clipboard_with_callback(&id, move || {
            copied.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
                copied.set(false);
            });
        });
    };

    let track_href = move || format!("/track/{}", urlencoding::encode(&fnol_id.get()));

    view! {
        <div class="page success">
            <div class="card success__card">
                <div class="success__icon">{icon("check-circle")}</div>
                <h1 class="success__title">{move || locale.t(TextKey::SuccessTitle)}</h1>
                <p class="success__message">{move || locale.t(TextKey::SuccessMessage)}</p>

                <div class="success__reference">
                    <span class="success__caption">{move || locale.t(TextKey::SuccessFnolId)}</span>
                    <div class="success__id-row">
                        <code class="success__id">{move || fnol_id.get()}</code>
                        <Button variant="secondary" size="sm" on_click=Callback::new(copy)>
                            {icon("copy")}
                            {move || if copied.get() {
                                locale.t(TextKey::Copied)
                            } else {
                                locale.t(TextKey::Copy)
                            }}
                        </Button>
                    </div>
                </div>

                <div class="success__actions">
                    <A href=track_href attr:class="button button--primary">
                        {icon("search")}
                        {move || locale.t(TextKey::SuccessTrackLink)}
                    </A>
                    <A href="/" attr:class="button button--secondary">
                        {icon("home")}
                        {move || locale.t(TextKey::NavHome)}
                    </A>
                </div>
            </div>
        </div>
    }
}
