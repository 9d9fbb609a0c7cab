use crate::domain::a001_fnol::state::review_sections;
use crate::domain::a001_fnol::ui::wizard::WizardViewModel;
use crate::shared::i18n::TextKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Read-only summary of the draft, one card per editing step
#[component]
pub fn ReviewStep(vm: WizardViewModel) -> impl IntoView {
    let sections = move || {
        let locale = vm.locale.locale();
        vm.state.with(|s| review_sections(&s.draft, &locale))
    };

    view! {
        <div class="review-step">
            <For
                each=sections
                key=|section| (section.step, section.rows.clone())
                children=move |section| {
                    let empty = section.rows.is_empty();
                    view! {
                        <section class="review-card">
                            <h3 class="review-card__title">
                                {icon(section.step.icon())}
                                {move || vm.locale.t(section.step.title_key())}
                            </h3>
                            <Show when=move || empty>
                                <p class="review-card__empty">{move || vm.locale.t(TextKey::NoAttachments)}</p>
                            </Show>
                            <dl class="review-card__rows">
                                {section.rows.into_iter().map(|row| view! {
                                    <div class="review-card__row">
                                        <dt>{row.label}</dt>
                                        <dd>{row.value}</dd>
                                    </div>
                                }).collect_view()}
                            </dl>
                        </section>
                    }
                }
            />
        </div>
    }
}
