use crate::domain::a001_fnol::labels::label_key;
use crate::domain::a001_fnol::state::{country_options, coverage_options, vehicle_type_options, WizardAction};
use crate::domain::a001_fnol::ui::wizard::WizardViewModel;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use contracts::domain::a001_fnol::DraftField;
use contracts::shared::metadata::WidgetKind;
use leptos::prelude::*;

fn select_options(field: DraftField) -> Vec<(String, String)> {
    match field {
        DraftField::CountryCode | DraftField::PlateCountry => country_options(),
        DraftField::VehicleType => vehicle_type_options(),
        DraftField::CoverageType => coverage_options(),
        _ => Vec::new(),
    }
}

/// Country-specific helper text for contact fields
fn contact_hint(vm: WizardViewModel, field: DraftField) -> Option<String> {
    let country = vm.state.with(|s| s.draft.country_code)?;
    match field {
        DraftField::MobileNumber => Some(country.dial_prefix().to_string()),
        DraftField::NationalId => Some(country.national_id_name().to_string()),
        _ => None,
    }
}

/// One draft field rendered with the widget its metadata declares
#[component]
pub fn DraftFieldView(vm: WizardViewModel, field: DraftField) -> impl IntoView {
    let meta = field.metadata();
    let id = meta.key;
    let label = Signal::derive(move || Some(vm.locale.t(label_key(field)).to_string()));
    let error = Signal::derive(move || vm.field_error(field));
    let value: Signal<String> = Signal::from(vm.field_value(field));
    let on_text = Callback::new(move |v: String| vm.dispatch(WizardAction::SetText(field, v)));

    match meta.widget {
        WidgetKind::Select => view! {
            <Select
                id=id
                label=label
                value=value
                options=Signal::derive(move || select_options(field))
                on_change=on_text
                error=error
                required=meta.is_required()
            />
        }
        .into_any(),
        WidgetKind::Checkbox => view! {
            <Checkbox
                id=id
                label=Signal::derive(move || vm.locale.t(label_key(field)).to_string())
                checked=Signal::from(vm.field_flag(field))
                on_change=Callback::new(move |checked: bool| {
                    vm.dispatch(WizardAction::SetFlag(field, checked))
                })
            />
        }
        .into_any(),
        WidgetKind::TextArea => view! {
            <Textarea
                id=id
                label=label
                value=value
                on_input=on_text
                error=error
                required=meta.is_required()
                rows=5
            />
        }
        .into_any(),
        WidgetKind::RepeatedGroup => ().into_any(),
        WidgetKind::Text
        | WidgetKind::Email
        | WidgetKind::Date
        | WidgetKind::Time
        | WidgetKind::Number => {
            let input_type = meta.widget.input_type().unwrap_or("text");
            // Incidents cannot be reported ahead of time
            let max = (meta.widget == WidgetKind::Date).then(today_iso);
            let step = match field {
                DraftField::Latitude | DraftField::Longitude => Some("any"),
                _ => None,
            };
            view! {
                <Input
                    id=id
                    label=label
                    input_type=input_type
                    value=value
                    on_input=on_text
                    hint=Signal::derive(move || contact_hint(vm, field))
                    error=error
                    required=meta.is_required()
                    max=max
                    step=step.map(str::to_string)
                />
            }
            .into_any()
        }
    }
}
