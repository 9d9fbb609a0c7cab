use super::view_model::WizardViewModel;
use crate::domain::a001_fnol::state::{WizardAction, WizardStep};
use crate::domain::a001_fnol::ui::steps::StepBody;
use crate::shared::components::ui::Button;
use crate::shared::i18n::{fill, TextKey};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
fn Stepper(vm: WizardViewModel) -> impl IntoView {
    let current = Memo::new(move |_| vm.step().index());

    view! {
        <ol class="stepper">
            {WizardStep::ALL.into_iter().map(|step| {
                let class = move || {
                    let index = step.index();
                    let current = current.get();
                    if index == current {
                        "stepper__item stepper__item--active"
                    } else if index < current {
                        "stepper__item stepper__item--done"
                    } else {
                        "stepper__item"
                    }
                };
                view! {
                    <li class=class aria-current=move || (step.index() == current.get()).then_some("step")>
                        <span class="stepper__icon">{icon(step.icon())}</span>
                        <span class="stepper__label">{move || vm.locale.t(step.title_key())}</span>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

/// Five-step claim form
#[component]
pub fn FnolWizard() -> impl IntoView {
    let vm = WizardViewModel::new();
    let navigate = use_navigate();

    let progress = move || {
        let current = (vm.step().index() + 1).to_string();
        let total = WizardStep::ALL.len().to_string();
        fill(vm.locale.t(TextKey::StepProgress), &[&current, &total])
    };

    view! {
        <div class="page wizard">
            <header class="page__header">
                <h1 class="page__title">{move || vm.locale.t(TextKey::NavNewClaim)}</h1>
                <p class="page__subtitle">{progress}</p>
            </header>

            <Stepper vm=vm />

            <div class="card wizard__card">
                <div class="wizard__step-header">
                    <h2>{move || vm.locale.t(vm.step().title_key())}</h2>
                    <p class="wizard__hint">{move || vm.locale.t(vm.step().hint_key())}</p>
                </div>

                {move || vm.state.with(|s| s.banner.clone()).map(|message| view! {
                    <div class="alert alert--error" role="alert">
                        <span>{message}</span>
                        <button
                            class="alert__close"
                            title=move || vm.locale.t(TextKey::Dismiss)
                            on:click=move |_| vm.dispatch(WizardAction::DismissBanner)
                        >
                            "×"
                        </button>
                    </div>
                })}

                <StepBody vm=vm />

                <div class="wizard__actions">
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || vm.step().is_first() || vm.is_submitting())
                        on_click=Callback::new(move |_| vm.back_command())
                    >
                        {icon("chevron-left")}
                        {move || vm.locale.t(TextKey::Back)}
                    </Button>

                    <Show
                        when=move || vm.step().is_last()
                        fallback=move || view! {
                            <Button on_click=Callback::new(move |_| vm.next_command())>
                                {move || vm.locale.t(TextKey::Next)}
                                {icon("chevron-right")}
                            </Button>
                        }
                    >
                        {
                            let navigate = navigate.clone();
                            view! {
                                <Button
                                    busy=Signal::derive(move || vm.is_submitting())
                                    on_click=Callback::new({
                                        let navigate = navigate.clone();
                                        move |_| {
                                            let navigate = navigate.clone();
                                            vm.submit_command(move |route| navigate(&route, Default::default()));
                                        }
                                    })
                                >
                                    {icon("check-circle")}
                                    {move || if vm.is_submitting() {
                                        vm.locale.t(TextKey::Loading)
                                    } else {
                                        vm.locale.t(TextKey::Submit)
                                    }}
                                </Button>
                            }
                        }
                    </Show>
                </div>
            </div>
        </div>
    }
}
