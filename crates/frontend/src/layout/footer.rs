use crate::domain::a001_fnol::api::fetch_app_info;
use crate::shared::components::ui::Badge;
use crate::shared::i18n::{use_locale, TextKey};
use contracts::system::info::AppInfo;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum ServerStatus {
    Checking,
    Online(AppInfo),
    Offline,
}

impl ServerStatus {
    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online(_) => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

/// Backend version and demo-mode flag from `/info`
#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let status = RwSignal::new(ServerStatus::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let next = match fetch_app_info().await {
                Ok(info) => ServerStatus::Online(info),
                Err(e) => {
                    log::warn!("backend info unavailable: {}", e);
                    ServerStatus::Offline
                }
            };
            status.set(next);
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__brand">{move || locale.t(TextKey::AppTitle)}</span>
            <span class=move || status.with(|s| s.css_class())>
                {move || match status.get() {
                    ServerStatus::Checking => locale.t(TextKey::Loading).to_string(),
                    ServerStatus::Online(info) => format!("{} v{}", locale.t(TextKey::ServerOnline), info.version),
                    ServerStatus::Offline => locale.t(TextKey::ServerOffline).to_string(),
                }}
            </span>
            <Show when=move || status.with(|s| matches!(s, ServerStatus::Online(info) if info.demo_mode))>
                <Badge variant="warning">{move || locale.t(TextKey::DemoMode)}</Badge>
            </Show>
        </footer>
    }
}
