use super::view_model::TrackingViewModel;
use crate::domain::a001_fnol::status_display::{route_display, severity_display, status_display, DisplayValue};
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::i18n::{LocaleService, TextKey};
use crate::shared::icons::icon;
use contracts::domain::a001_fnol::StatusSnapshot;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

#[component]
fn DisplayBadge(locale: LocaleService, value: DisplayValue) -> impl IntoView {
    let label = value.label.clone();
    view! {
        <Badge
            variant=value.badge_variant
            color=value.color
            bg_color=value.bg_color
        >
            {move || label.text(&locale.locale())}
        </Badge>
    }
}

#[component]
fn StatusCard(locale: LocaleService, snapshot: StatusSnapshot) -> impl IntoView {
    let status = status_display(&snapshot.status);
    let severity = severity_display(&snapshot.severity_level);
    let route = route_display(&snapshot.route);
    let progress = route.progress;
    let accent = format!(
        "background: linear-gradient(90deg, {} 0%, {} 100%);",
        status.color, severity.color
    );
    let bar = format!(
        "width: {}%; background: linear-gradient(90deg, {} 0%, {} 100%);",
        progress, route.value.color, status.color
    );

    view! {
        <div class="card status-card">
            <div class="status-card__accent" style=accent></div>

            <div class="status-card__reference">
                <span class="status-card__caption">{move || locale.t(TextKey::TrackingReference)}</span>
                <span class="status-card__id">{snapshot.fnol_id.clone()}</span>
            </div>

            <div class="status-card__progress">
                <div class="status-card__progress-header">
                    <span>{move || locale.t(TextKey::TrackingProgress)}</span>
                    <span>{format!("{}%", progress)}</span>
                </div>
                <div
                    class="progress"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=progress.to_string()
                >
                    <div class="progress__bar" style=bar></div>
                </div>
            </div>

            <dl class="status-card__grid">
                <div>
                    <dt>{move || locale.t(TextKey::TrackingStatus)}</dt>
                    <dd><DisplayBadge locale=locale value=status /></dd>
                </div>
                <div>
                    <dt>{move || locale.t(TextKey::TrackingSeverity)}</dt>
                    <dd><DisplayBadge locale=locale value=severity /></dd>
                </div>
                <div>
                    <dt>{move || locale.t(TextKey::TrackingRoute)}</dt>
                    <dd><DisplayBadge locale=locale value=route.value /></dd>
                </div>
                <div>
                    <dt>{move || locale.t(TextKey::TrackingSubmitted)}</dt>
                    <dd>{format_date(&snapshot.created_at)}</dd>
                </div>
                {snapshot.updated_at.as_deref().map(|updated| {
                    let updated = format_datetime(updated);
                    view! {
                        <div class="status-card__updated">
                            <dt>{move || locale.t(TextKey::TrackingLastUpdated)}</dt>
                            <dd>{updated}</dd>
                        </div>
                    }
                })}
            </dl>
        </div>
    }
}

/// Claim status lookup, optionally preloaded from `/track/:fnol_id`
#[component]
pub fn TrackingPage() -> impl IntoView {
    let vm = TrackingViewModel::new();
    let params = use_params_map();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(id) = params.read().get("fnol_id").filter(|id| !id.trim().is_empty()) {
            vm.load_from_route(id);
        }
    });

    let search = move || {
        let navigate = navigate.clone();
        vm.search_command(move |id| {
            navigate(
                &format!("/track/{}", urlencoding::encode(&id)),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    };
    let search_on_enter = search.clone();

    view! {
        <div class="page tracking">
            <header class="page__header">
                <h1 class="page__title">
                    {icon("search")}
                    {move || vm.locale.t(TextKey::TrackingTitle)}
                </h1>
                <p class="page__subtitle">{move || vm.locale.t(TextKey::TrackingSubtitle)}</p>
            </header>

            <div class="card tracking__search">
                <div
                    class="tracking__search-row"
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            search_on_enter();
                        }
                    }
                >
                    <Input
                        id="fnol-id"
                        class="tracking__input"
                        value=Signal::derive(move || vm.state.with(|s| s.query.clone()))
                        on_input=Callback::new(move |v: String| vm.set_query(v))
                        placeholder=Signal::derive(move || Some(vm.locale.t(TextKey::TrackingEnterFnolId).to_string()))
                        autocomplete="off"
                    />
                    <Button
                        disabled=Signal::derive(move || !vm.can_search())
                        busy=Signal::derive(move || vm.is_searching())
                        on_click=Callback::new(move |_| search())
                    >
                        {move || if vm.is_searching() {
                            vm.locale.t(TextKey::Loading)
                        } else {
                            vm.locale.t(TextKey::TrackingSearch)
                        }}
                    </Button>
                </div>
            </div>

            {move || vm.state.with(|s| s.banner.clone()).map(|message| view! {
                <div class="alert alert--error" role="alert">
                    <span>{message}</span>
                    <button
                        class="alert__close"
                        title=move || vm.locale.t(TextKey::Dismiss)
                        on:click=move |_| vm.dismiss_banner()
                    >
                        "×"
                    </button>
                </div>
            })}

            {move || vm.state.with(|s| s.snapshot().cloned()).map(|snapshot| view! {
                <StatusCard locale=vm.locale snapshot=snapshot />
            })}
        </div>
    }
}
