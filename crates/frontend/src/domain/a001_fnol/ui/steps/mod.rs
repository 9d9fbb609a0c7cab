//! Step bodies of the claim wizard
//!
//! Contact, vehicle and incident steps render their declared fields in order;
//! attachments and review have dedicated views.

mod attachments;
mod field;
mod review;

pub use attachments::AttachmentsStep;
pub use field::DraftFieldView;
pub use review::ReviewStep;

use super::wizard::WizardViewModel;
use crate::domain::a001_fnol::state::WizardStep;
use leptos::prelude::*;

#[component]
pub fn StepFields(vm: WizardViewModel, step: WizardStep) -> impl IntoView {
    view! {
        <div class="form__grid">
            {step
                .fields()
                .iter()
                .map(|field| view! { <DraftFieldView vm=vm field=*field /> })
                .collect_view()}
        </div>
    }
}

/// Body for the current step
#[component]
pub fn StepBody(vm: WizardViewModel) -> impl IntoView {
    let step = Memo::new(move |_| vm.step());

    move || match step.get() {
        WizardStep::Attachments => view! { <AttachmentsStep vm=vm /> }.into_any(),
        WizardStep::Review => view! { <ReviewStep vm=vm /> }.into_any(),
        other => view! { <StepFields vm=vm step=other /> }.into_any(),
    }
}
