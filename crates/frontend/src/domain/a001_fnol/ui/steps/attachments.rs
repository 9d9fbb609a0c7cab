use crate::domain::a001_fnol::state::{attachment_type_options, WizardAction};
use crate::domain::a001_fnol::ui::wizard::WizardViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::i18n::TextKey;
use crate::shared::icons::icon;
use contracts::enums::AttachmentType;
use leptos::prelude::*;

#[component]
fn AttachmentRow(vm: WizardViewModel, index: usize) -> impl IntoView {
    let state = vm.state;
    let url = Memo::new(move |_| {
        state.with(|s| s.draft.attachments.get(index).map(|a| a.url.clone()).unwrap_or_default())
    });
    let kind = Memo::new(move |_| {
        state.with(|s| {
            s.draft
                .attachments
                .get(index)
                .map(|a| a.kind.code().to_string())
                .unwrap_or_default()
        })
    });
    let description = Memo::new(move |_| {
        state.with(|s| {
            s.draft
                .attachments
                .get(index)
                .map(|a| a.description.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="attachment-row">
            <span class="attachment-row__index">{index + 1}</span>
            <Input
                id=format!("attachment-url-{}", index)
                label=Signal::derive(move || Some(vm.locale.t(TextKey::AttachmentUrl).to_string()))
                input_type="url"
                placeholder="https://..."
                value={Signal::<String>::from(url)}
                on_input=Callback::new(move |v: String| vm.dispatch(WizardAction::SetAttachmentUrl(index, v)))
            />
            <Select
                id=format!("attachment-type-{}", index)
                label=Signal::derive(move || Some(vm.locale.t(TextKey::AttachmentType).to_string()))
                value={Signal::<String>::from(kind)}
                options=Signal::derive(attachment_type_options)
                on_change=Callback::new(move |code: String| {
                    if let Some(kind) = AttachmentType::from_code(&code) {
                        vm.dispatch(WizardAction::SetAttachmentType(index, kind));
                    }
                })
            />
            <Input
                id=format!("attachment-description-{}", index)
                label=Signal::derive(move || Some(vm.locale.t(TextKey::AttachmentDescription).to_string()))
                value={Signal::<String>::from(description)}
                on_input=Callback::new(move |v: String| {
                    vm.dispatch(WizardAction::SetAttachmentDescription(index, v))
                })
            />
            <Button
                variant="ghost"
                size="sm"
                class="attachment-row__remove"
                on_click=Callback::new(move |_| vm.dispatch(WizardAction::RemoveAttachment(index)))
            >
                {icon("trash")}
                <span class="visually-hidden">{move || vm.locale.t(TextKey::RemoveAttachment)}</span>
            </Button>
        </div>
    }
}

/// URL-based attachment list; rows are rebuilt only when one is added or removed
#[component]
pub fn AttachmentsStep(vm: WizardViewModel) -> impl IntoView {
    let count = Memo::new(move |_| vm.state.with(|s| s.draft.attachments.len()));

    view! {
        <div class="attachments-step">
            <div class="attachments-step__toolbar">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| vm.dispatch(WizardAction::AddAttachment))
                >
                    {icon("paperclip")}
                    {move || vm.locale.t(TextKey::AddAttachment)}
                </Button>
            </div>

            {move || {
                let n = count.get();
                if n == 0 {
                    view! {
                        <p class="attachments-step__empty">{move || vm.locale.t(TextKey::NoAttachments)}</p>
                    }
                    .into_any()
                } else {
                    (0..n)
                        .map(|index| view! { <AttachmentRow vm=vm index=index /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
