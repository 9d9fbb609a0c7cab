//! Wizard controller
//!
//! Pure state machine behind the five-step form. The view model wraps it in a
//! signal; everything here runs without a browser.

use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::{Locale, TextKey};
use contracts::domain::a001_fnol::{validate_fields, ClaimDraft, DraftField, FieldError};
use contracts::enums::{AttachmentType, CoverageType, GccCountry, LanguageCode, VehicleType};
use contracts::usecases::u501_submit_fnol::{IdempotencyKey, SubmissionResult, SubmitFnolRequest};
use leptos::prelude::*;
use thiserror::Error;

use super::labels::label_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    Contact,
    Vehicle,
    Incident,
    Attachments,
    Review,
}

const CONTACT_FIELDS: &[DraftField] = &[
    DraftField::CountryCode,
    DraftField::MobileNumber,
    DraftField::NationalId,
    DraftField::ReporterName,
    DraftField::ReporterEmail,
];

const VEHICLE_FIELDS: &[DraftField] = &[
    DraftField::PlateNumber,
    DraftField::PlateCountry,
    DraftField::VehicleType,
    DraftField::VehicleMake,
    DraftField::VehicleModel,
    DraftField::VehicleYear,
    DraftField::VehicleColor,
    DraftField::PolicyNumber,
    DraftField::CoverageType,
    DraftField::IsFleet,
];

const INCIDENT_FIELDS: &[DraftField] = &[
    DraftField::IncidentDate,
    DraftField::IncidentTime,
    DraftField::IncidentLocation,
    DraftField::Latitude,
    DraftField::Longitude,
    DraftField::Description,
    DraftField::IsDrivable,
    DraftField::HasInjuries,
    DraftField::ThirdPartyInvolved,
    DraftField::PoliceReportNumber,
];

const ATTACHMENT_FIELDS: &[DraftField] = &[DraftField::Attachments];

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Contact,
        WizardStep::Vehicle,
        WizardStep::Incident,
        WizardStep::Attachments,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Contact => 0,
            WizardStep::Vehicle => 1,
            WizardStep::Incident => 2,
            WizardStep::Attachments => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Fields this step edits and validates; Review declares none
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            WizardStep::Contact => CONTACT_FIELDS,
            WizardStep::Vehicle => VEHICLE_FIELDS,
            WizardStep::Incident => INCIDENT_FIELDS,
            WizardStep::Attachments => ATTACHMENT_FIELDS,
            WizardStep::Review => &[],
        }
    }

    pub fn title_key(&self) -> TextKey {
        match self {
            WizardStep::Contact => TextKey::StepContact,
            WizardStep::Vehicle => TextKey::StepVehicle,
            WizardStep::Incident => TextKey::StepIncident,
            WizardStep::Attachments => TextKey::StepAttachments,
            WizardStep::Review => TextKey::StepReview,
        }
    }

    pub fn hint_key(&self) -> TextKey {
        match self {
            WizardStep::Contact => TextKey::HintContact,
            WizardStep::Vehicle => TextKey::HintVehicle,
            WizardStep::Incident => TextKey::HintIncident,
            WizardStep::Attachments => TextKey::HintAttachments,
            WizardStep::Review => TextKey::HintReview,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::Contact => "user",
            WizardStep::Vehicle => "car",
            WizardStep::Incident => "alert",
            WizardStep::Attachments => "paperclip",
            WizardStep::Review => "check-list",
        }
    }

    fn owning(field: DraftField) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.fields().contains(&field))
    }
}

/// User edits routed through [`WizardState::update`]
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    SetText(DraftField, String),
    SetFlag(DraftField, bool),
    AddAttachment,
    RemoveAttachment(usize),
    SetAttachmentUrl(usize, String),
    SetAttachmentType(usize, AttachmentType),
    SetAttachmentDescription(usize, String),
    DismissBanner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced(WizardStep),
    /// Stayed on the step; one error per failing field
    Blocked(Vec<FieldError>),
    /// Already on the last step
    AtEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinalizeRejected {
    #[error("submission is only possible from the review step")]
    NotOnReviewStep,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required data missing on step {0:?}")]
    Invalid(WizardStep),
}

/// Everything needed for one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub request: SubmitFnolRequest,
    pub idempotency_key: IdempotencyKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: ClaimDraft,
    pub field_errors: Vec<FieldError>,
    pub submitting: bool,
    /// Form-level error shown above the step
    pub banner: Option<String>,
}

impl WizardState {
    pub fn update(&mut self, action: WizardAction) {
        match action {
            WizardAction::SetText(field, value) => {
                self.draft.set_text(field, value);
                self.clear_error(field);
            }
            WizardAction::SetFlag(field, value) => {
                self.draft.set_flag(field, value);
                self.clear_error(field);
            }
            WizardAction::AddAttachment => {
                self.draft.add_attachment();
            }
            WizardAction::RemoveAttachment(index) => {
                self.draft.remove_attachment(index);
            }
            WizardAction::SetAttachmentUrl(index, url) => self.draft.set_attachment_url(index, url),
            WizardAction::SetAttachmentType(index, kind) => {
                self.draft.set_attachment_kind(index, kind)
            }
            WizardAction::SetAttachmentDescription(index, text) => {
                self.draft.set_attachment_description(index, text)
            }
            WizardAction::DismissBanner => self.banner = None,
        }
    }

    fn clear_error(&mut self, field: DraftField) {
        self.field_errors.retain(|e| e.field != field);
    }

    pub fn error_for(&self, field: DraftField) -> Option<FieldError> {
        self.field_errors.iter().find(|e| e.field == field).copied()
    }

    /// Validate the current step and move forward when it passes
    pub fn advance(&mut self) -> AdvanceOutcome {
        let Some(next) = self.step.next() else {
            return AdvanceOutcome::AtEnd;
        };
        let errors = validate_fields(&self.draft, self.step.fields());
        if errors.is_empty() {
            self.step = next;
            self.field_errors.clear();
            AdvanceOutcome::Advanced(next)
        } else {
            self.field_errors = errors.clone();
            AdvanceOutcome::Blocked(errors)
        }
    }

    /// Step back without validating; stays on the first step
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Re-check every step and hand out a ticket for one submission attempt.
    ///
    /// A failing field sends the wizard back to the first step that owns one.
    /// Each accepted call carries a new idempotency key.
    pub fn begin_submission(
        &mut self,
        language: LanguageCode,
    ) -> Result<SubmissionTicket, FinalizeRejected> {
        if self.step != WizardStep::Review {
            return Err(FinalizeRejected::NotOnReviewStep);
        }
        if self.submitting {
            return Err(FinalizeRejected::InFlight);
        }

        let all_fields: Vec<DraftField> = WizardStep::ALL
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        let errors = validate_fields(&self.draft, &all_fields);
        if let Some(first) = errors.first() {
            let step = WizardStep::owning(first.field).unwrap_or_default();
            self.step = step;
            self.field_errors = errors;
            return Err(FinalizeRejected::Invalid(step));
        }

        self.submitting = true;
        self.banner = None;
        Ok(SubmissionTicket {
            request: SubmitFnolRequest::from_draft(&self.draft, language),
            idempotency_key: IdempotencyKey::generate(),
        })
    }

    /// Record the backend's answer; returns the confirmation route on success.
    ///
    /// On failure the draft and step stay as they were so the user can retry.
    pub fn complete_submission(
        &mut self,
        result: Result<SubmissionResult, ApiError>,
        fallback: &str,
    ) -> Option<String> {
        self.submitting = false;
        match result {
            Ok(ack) => Some(format!("/success/{}", urlencoding::encode(&ack.fnol_id))),
            Err(e) => {
                self.banner = Some(e.user_message(fallback));
                None
            }
        }
    }
}

pub fn create_state() -> RwSignal<WizardState> {
    RwSignal::new(WizardState::default())
}

/// One labelled value on the review step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub step: WizardStep,
    pub rows: Vec<ReviewRow>,
}

const EMPTY_VALUE: &str = "-";

fn review_value(draft: &ClaimDraft, field: DraftField, locale: &Locale) -> String {
    let value = match field {
        DraftField::CountryCode => draft.country_code.map(|c| c.display_name().to_string()),
        DraftField::PlateCountry => draft.plate_country.map(|c| c.display_name().to_string()),
        DraftField::VehicleType => draft.vehicle_type.map(|t| t.display_name().to_string()),
        DraftField::CoverageType => draft.coverage_type.map(|t| t.display_name().to_string()),
        DraftField::IncidentDate => Some(format_date(&draft.incident_date)),
        _ => match field.flag_of(draft) {
            Some(true) => Some(locale.t(TextKey::Yes).to_string()),
            Some(false) => Some(locale.t(TextKey::No).to_string()),
            None => Some(field.value_of(draft)),
        },
    };
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// Read-only projection of the draft, one section per editing step
pub fn review_sections(draft: &ClaimDraft, locale: &Locale) -> Vec<ReviewSection> {
    let mut sections: Vec<ReviewSection> = [WizardStep::Contact, WizardStep::Vehicle, WizardStep::Incident]
        .into_iter()
        .map(|step| ReviewSection {
            step,
            rows: step
                .fields()
                .iter()
                .map(|field| ReviewRow {
                    label: locale.t(label_key(*field)).to_string(),
                    value: review_value(draft, *field, locale),
                })
                .collect(),
        })
        .collect();

    sections.push(ReviewSection {
        step: WizardStep::Attachments,
        rows: draft
            .attachments
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let url = a.url.trim();
                let note = a.description.trim();
                let value = match (url.is_empty(), note.is_empty()) {
                    (true, _) => EMPTY_VALUE.to_string(),
                    (false, true) => url.to_string(),
                    (false, false) => format!("{} ({})", url, note),
                };
                ReviewRow {
                    label: format!("{}. {}", i + 1, a.kind.display_name()),
                    value,
                }
            })
            .collect(),
    });
    sections
}

/// Options for select widgets as (code, display name)
pub fn country_options() -> Vec<(String, String)> {
    GccCountry::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect()
}

pub fn vehicle_type_options() -> Vec<(String, String)> {
    VehicleType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

pub fn coverage_options() -> Vec<(String, String)> {
    CoverageType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

pub fn attachment_type_options() -> Vec<(String, String)> {
    AttachmentType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::ValidationFailure;

    fn text(field: DraftField, value: &str) -> WizardAction {
        WizardAction::SetText(field, value.to_string())
    }

    fn complete_state() -> WizardState {
        let mut state = WizardState::default();
        for action in [
            text(DraftField::MobileNumber, "+971501234567"),
            text(DraftField::NationalId, "784-1990-1234567-1"),
            text(DraftField::PlateNumber, "Dubai A 12345"),
            text(DraftField::IncidentDate, "2025-04-02"),
        ] {
            state.update(action);
        }
        state
    }

    fn walk_to_review(state: &mut WizardState) {
        while !state.step.is_last() {
            assert!(matches!(state.advance(), AdvanceOutcome::Advanced(_)));
        }
    }

    fn ack(fnol_id: &str) -> SubmissionResult {
        SubmissionResult {
            fnol_id: fnol_id.to_string(),
            status: "SUBMITTED".into(),
            severity_level: "LOW".into(),
            route: "fast-track".into(),
            process_instance_key: None,
            created_at: "2025-04-02T11:00:00".into(),
            is_duplicate: false,
            message: None,
        }
    }

    #[test]
    fn test_step_navigation_helpers() {
        assert_eq!(WizardStep::Contact.prev(), None);
        assert_eq!(WizardStep::Contact.next(), Some(WizardStep::Vehicle));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::from_index(3), Some(WizardStep::Attachments));
        assert_eq!(WizardStep::from_index(5), None);
        assert!(WizardStep::Review.fields().is_empty());
    }

    #[test]
    fn test_every_field_belongs_to_exactly_one_step() {
        let total: usize = WizardStep::ALL.iter().map(|s| s.fields().len()).sum();
        assert_eq!(total, 26);
        for step in WizardStep::ALL {
            for field in step.fields() {
                assert_eq!(WizardStep::owning(*field), Some(step));
            }
        }
    }

    #[test]
    fn test_empty_required_contact_fields_block_advance() {
        let mut state = WizardState::default();
        state.update(text(DraftField::CountryCode, ""));

        let outcome = state.advance();

        assert_eq!(state.step, WizardStep::Contact);
        let AdvanceOutcome::Blocked(errors) = outcome else {
            panic!("expected the step to be blocked");
        };
        let fields: Vec<DraftField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![DraftField::CountryCode, DraftField::MobileNumber, DraftField::NationalId]
        );
        assert!(errors.iter().all(|e| e.failure == ValidationFailure::Required));
        assert_eq!(state.field_errors.len(), 3);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut state = WizardState::default();
        state.advance();
        assert!(state.error_for(DraftField::MobileNumber).is_some());

        state.update(text(DraftField::MobileNumber, "+971501234567"));

        assert!(state.error_for(DraftField::MobileNumber).is_none());
        assert!(state.error_for(DraftField::NationalId).is_some());
    }

    #[test]
    fn test_invalid_email_blocks_only_when_filled() {
        let mut state = complete_state();
        state.update(text(DraftField::ReporterEmail, "driver-at-example.ae"));
        assert!(matches!(state.advance(), AdvanceOutcome::Blocked(_)));
        assert_eq!(
            state.error_for(DraftField::ReporterEmail).map(|e| e.failure),
            Some(ValidationFailure::InvalidFormat)
        );

        state.update(text(DraftField::ReporterEmail, ""));
        assert_eq!(state.advance(), AdvanceOutcome::Advanced(WizardStep::Vehicle));
    }

    #[test]
    fn test_advance_validates_only_the_current_step() {
        let mut state = WizardState::default();
        state.update(text(DraftField::MobileNumber, "+96650000000"));
        state.update(text(DraftField::NationalId, "1234567890"));

        // Plate number and incident date are still empty but belong to later steps
        assert_eq!(state.advance(), AdvanceOutcome::Advanced(WizardStep::Vehicle));
        assert!(state.field_errors.is_empty());
        assert!(matches!(state.advance(), AdvanceOutcome::Blocked(_)));
        assert_eq!(state.step, WizardStep::Vehicle);
    }

    #[test]
    fn test_retreat_saturates_at_first_step_and_never_validates() {
        let mut state = WizardState::default();
        state.retreat();
        assert_eq!(state.step, WizardStep::Contact);

        let mut state = complete_state();
        walk_to_review(&mut state);
        state.update(text(DraftField::MobileNumber, ""));
        state.retreat();
        assert_eq!(state.step, WizardStep::Attachments);
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_advance_at_review_is_at_end() {
        let mut state = complete_state();
        walk_to_review(&mut state);
        assert_eq!(state.advance(), AdvanceOutcome::AtEnd);
        assert_eq!(state.step, WizardStep::Review);
    }

    #[test]
    fn test_begin_submission_outside_review_is_rejected() {
        let mut state = complete_state();
        assert_eq!(
            state.begin_submission(LanguageCode::En),
            Err(FinalizeRejected::NotOnReviewStep)
        );
        assert!(!state.submitting);
    }

    #[test]
    fn test_begin_submission_while_in_flight_is_rejected() {
        let mut state = complete_state();
        walk_to_review(&mut state);

        assert!(state.begin_submission(LanguageCode::En).is_ok());
        assert_eq!(
            state.begin_submission(LanguageCode::En),
            Err(FinalizeRejected::InFlight)
        );
    }

    #[test]
    fn test_begin_submission_jumps_back_to_first_invalid_step() {
        let mut state = complete_state();
        walk_to_review(&mut state);
        // Simulate a draft edited behind the wizard's back
        state.draft.plate_number.clear();
        state.draft.incident_date.clear();

        let rejected = state.begin_submission(LanguageCode::En);

        assert_eq!(rejected, Err(FinalizeRejected::Invalid(WizardStep::Vehicle)));
        assert_eq!(state.step, WizardStep::Vehicle);
        assert!(state.error_for(DraftField::PlateNumber).is_some());
        assert!(state.error_for(DraftField::IncidentDate).is_some());
        assert!(!state.submitting);
    }

    #[test]
    fn test_each_attempt_gets_a_fresh_idempotency_key() {
        let mut state = complete_state();
        walk_to_review(&mut state);

        let first = state.begin_submission(LanguageCode::Ar).unwrap();
        assert_eq!(first.request.preferred_language, "AR");
        state.complete_submission(
            Err(ApiError::Network("offline".into())),
            "Submission failed",
        );

        let second = state.begin_submission(LanguageCode::Ar).unwrap();
        assert_ne!(first.idempotency_key, second.idempotency_key);
    }

    #[test]
    fn test_failed_submission_keeps_draft_and_step() {
        let mut state = complete_state();
        walk_to_review(&mut state);
        let before = state.draft.clone();
        state.begin_submission(LanguageCode::En).unwrap();

        let route = state.complete_submission(
            Err(ApiError::Server {
                status: 400,
                message: Some("Invalid UAE mobile number".into()),
            }),
            "An error occurred while submitting your claim",
        );

        assert_eq!(route, None);
        assert!(!state.submitting);
        assert_eq!(state.step, WizardStep::Review);
        assert_eq!(state.draft, before);
        assert_eq!(state.banner.as_deref(), Some("Invalid UAE mobile number"));

        state.update(WizardAction::DismissBanner);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn test_failure_without_server_message_uses_fallback() {
        let mut state = complete_state();
        walk_to_review(&mut state);
        state.begin_submission(LanguageCode::En).unwrap();

        state.complete_submission(
            Err(ApiError::Server { status: 500, message: None }),
            "An error occurred while submitting your claim",
        );

        assert_eq!(
            state.banner.as_deref(),
            Some("An error occurred while submitting your claim")
        );
    }

    #[test]
    fn test_successful_submission_returns_confirmation_route() {
        let mut state = complete_state();
        walk_to_review(&mut state);
        state.begin_submission(LanguageCode::En).unwrap();

        let route = state.complete_submission(Ok(ack("FNOL-UAE-2025-000101")), "x");

        assert_eq!(route.as_deref(), Some("/success/FNOL-UAE-2025-000101"));
        assert!(!state.submitting);
    }

    #[test]
    fn test_attachment_actions() {
        let mut state = WizardState::default();
        state.update(WizardAction::AddAttachment);
        state.update(WizardAction::AddAttachment);
        state.update(WizardAction::SetAttachmentUrl(1, "https://x.ae/scene.mov".into()));
        state.update(WizardAction::SetAttachmentDescription(1, "rear bumper".into()));
        assert_eq!(state.draft.attachments[1].kind, AttachmentType::Video);

        state.update(WizardAction::SetAttachmentType(1, AttachmentType::Document));
        state.update(WizardAction::RemoveAttachment(0));
        state.update(WizardAction::RemoveAttachment(7));

        assert_eq!(state.draft.attachments.len(), 1);
        assert_eq!(state.draft.attachments[0].kind, AttachmentType::Document);
        assert_eq!(state.draft.attachments[0].description, "rear bumper");
    }

    #[test]
    fn test_review_substitutes_dash_for_empty_values() {
        let draft = ClaimDraft::default();
        let locale = Locale::new(LanguageCode::En);

        let sections = review_sections(&draft, &locale);

        assert_eq!(sections.len(), 4);
        let contact = &sections[0];
        let mobile = contact.rows.iter().find(|r| r.label == "Mobile Number").unwrap();
        assert_eq!(mobile.value, "-");
        let country = contact.rows.iter().find(|r| r.label == "Country").unwrap();
        assert_eq!(country.value, "United Arab Emirates");

        let incident = &sections[2];
        let drivable = incident.rows.iter().find(|r| r.label == "Vehicle is drivable").unwrap();
        assert_eq!(drivable.value, "Yes");
        assert!(sections[3].rows.is_empty());
    }

    #[test]
    fn test_review_lists_attachments_in_order() {
        let mut state = complete_state();
        state.update(WizardAction::AddAttachment);
        state.update(WizardAction::AddAttachment);
        state.update(WizardAction::SetAttachmentUrl(0, "https://x.ae/a.pdf".into()));

        let sections = review_sections(&state.draft, &Locale::new(LanguageCode::En));
        let rows = &sections[3].rows;

        assert_eq!(rows[0].label, "1. Document");
        assert_eq!(rows[0].value, "https://x.ae/a.pdf");
        assert_eq!(rows[1].label, "2. Image");
        assert_eq!(rows[1].value, "-");
    }
}
