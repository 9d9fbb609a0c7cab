//! Field catalogue of the claim draft
//!
//! Every editable field of [`ClaimDraft`] has a [`DraftField`] variant with static
//! metadata (widget + rules), a text projection and a setter. Views and the
//! wizard reducer go through these instead of touching struct fields directly.

use super::aggregate::ClaimDraft;
use crate::enums::{CoverageType, GccCountry, VehicleType};
use crate::shared::metadata::{FieldMetadata, ValidationFailure, ValidationRules, WidgetKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    CountryCode,
    MobileNumber,
    NationalId,
    ReporterName,
    ReporterEmail,
    PlateNumber,
    PlateCountry,
    VehicleType,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    VehicleColor,
    PolicyNumber,
    CoverageType,
    IsFleet,
    IncidentDate,
    IncidentTime,
    IncidentLocation,
    Latitude,
    Longitude,
    Description,
    IsDrivable,
    HasInjuries,
    ThirdPartyInvolved,
    PoliceReportNumber,
    Attachments,
}

const fn meta(key: &'static str, widget: WidgetKind, rules: ValidationRules) -> FieldMetadata {
    FieldMetadata::new(key, widget, rules)
}

impl DraftField {
    pub const fn metadata(&self) -> FieldMetadata {
        use ValidationRules as R;
        use WidgetKind as W;
        match self {
            DraftField::CountryCode => meta("countryCode", W::Select, R::required()),
            DraftField::MobileNumber => meta("mobileNumber", W::Text, R::required().with_max_length(20)),
            DraftField::NationalId => meta("nationalId", W::Text, R::required().with_max_length(50)),
            DraftField::ReporterName => meta("reporterName", W::Text, R::none().with_max_length(200)),
            DraftField::ReporterEmail => meta("reporterEmail", W::Email, R::email().with_max_length(200)),
            DraftField::PlateNumber => meta("plateNumber", W::Text, R::required().with_max_length(20)),
            DraftField::PlateCountry => meta("plateCountry", W::Select, R::none()),
            DraftField::VehicleType => meta("vehicleType", W::Select, R::none()),
            DraftField::VehicleMake => meta("vehicleMake", W::Text, R::none().with_max_length(100)),
            DraftField::VehicleModel => meta("vehicleModel", W::Text, R::none().with_max_length(100)),
            DraftField::VehicleYear => meta("vehicleYear", W::Number, R::none().with_range(1900, 2100)),
            DraftField::VehicleColor => meta("vehicleColor", W::Text, R::none()),
            DraftField::PolicyNumber => meta("policyNumber", W::Text, R::none().with_max_length(50)),
            DraftField::CoverageType => meta("coverageType", W::Select, R::none()),
            DraftField::IsFleet => meta("isFleet", W::Checkbox, R::none()),
            DraftField::IncidentDate => meta("incidentDate", W::Date, R::required()),
            DraftField::IncidentTime => meta("incidentTime", W::Time, R::none()),
            DraftField::IncidentLocation => meta("incidentLocation", W::Text, R::none().with_max_length(500)),
            DraftField::Latitude => meta("latitude", W::Number, R::none()),
            DraftField::Longitude => meta("longitude", W::Number, R::none()),
            DraftField::Description => meta("description", W::TextArea, R::none().with_max_length(5000)),
            DraftField::IsDrivable => meta("isDrivable", W::Checkbox, R::none()),
            DraftField::HasInjuries => meta("hasInjuries", W::Checkbox, R::none()),
            DraftField::ThirdPartyInvolved => meta("thirdPartyInvolved", W::Checkbox, R::none()),
            DraftField::PoliceReportNumber => meta("policeReportNumber", W::Text, R::none().with_max_length(100)),
            DraftField::Attachments => meta("attachments", W::RepeatedGroup, R::none()),
        }
    }

    /// JSON property name
    pub const fn key(&self) -> &'static str {
        self.metadata().key
    }

    pub const fn is_required(&self) -> bool {
        self.metadata().is_required()
    }

    /// Text form of the field's current value (empty when unset)
    pub fn value_of(&self, draft: &ClaimDraft) -> String {
        fn opt_num<T: ToString>(v: Option<T>) -> String {
            v.map(|n| n.to_string()).unwrap_or_default()
        }
        fn flag(v: bool) -> String {
            v.to_string()
        }
        match self {
            DraftField::CountryCode => draft.country_code.map(|c| c.code().to_string()).unwrap_or_default(),
            DraftField::MobileNumber => draft.mobile_number.clone(),
            DraftField::NationalId => draft.national_id.clone(),
            DraftField::ReporterName => draft.reporter_name.clone(),
            DraftField::ReporterEmail => draft.reporter_email.clone(),
            DraftField::PlateNumber => draft.plate_number.clone(),
            DraftField::PlateCountry => draft.plate_country.map(|c| c.code().to_string()).unwrap_or_default(),
            DraftField::VehicleType => draft.vehicle_type.map(|t| t.code().to_string()).unwrap_or_default(),
            DraftField::VehicleMake => draft.vehicle_make.clone(),
            DraftField::VehicleModel => draft.vehicle_model.clone(),
            DraftField::VehicleYear => draft.vehicle_year.clone(),
            DraftField::VehicleColor => draft.vehicle_color.clone(),
            DraftField::PolicyNumber => draft.policy_number.clone(),
            DraftField::CoverageType => draft.coverage_type.map(|t| t.code().to_string()).unwrap_or_default(),
            DraftField::IsFleet => flag(draft.is_fleet),
            DraftField::IncidentDate => draft.incident_date.clone(),
            DraftField::IncidentTime => draft.incident_time.clone(),
            DraftField::IncidentLocation => draft.incident_location.clone(),
            DraftField::Latitude => opt_num(draft.latitude),
            DraftField::Longitude => opt_num(draft.longitude),
            DraftField::Description => draft.description.clone(),
            DraftField::IsDrivable => flag(draft.is_drivable),
            DraftField::HasInjuries => flag(draft.has_injuries),
            DraftField::ThirdPartyInvolved => flag(draft.third_party_involved),
            DraftField::PoliceReportNumber => draft.police_report_number.clone(),
            DraftField::Attachments => draft.attachments.len().to_string(),
        }
    }

    /// Checkbox value, `None` for non-boolean fields
    pub fn flag_of(&self, draft: &ClaimDraft) -> Option<bool> {
        match self {
            DraftField::IsFleet => Some(draft.is_fleet),
            DraftField::IsDrivable => Some(draft.is_drivable),
            DraftField::HasInjuries => Some(draft.has_injuries),
            DraftField::ThirdPartyInvolved => Some(draft.third_party_involved),
            _ => None,
        }
    }

    /// Check the current value against the field's rules
    pub fn validate(&self, draft: &ClaimDraft) -> Result<(), ValidationFailure> {
        self.metadata().rules.validate_string(&self.value_of(draft))
    }
}

/// A field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub failure: ValidationFailure,
}

/// Validate the listed fields, in order, returning one error per failing field
pub fn validate_fields(draft: &ClaimDraft, fields: &[DraftField]) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            field
                .validate(draft)
                .err()
                .map(|failure| FieldError { field: *field, failure })
        })
        .collect()
}

impl ClaimDraft {
    /// Set a text-like field from raw widget input.
    ///
    /// Select fields take an enum code (blank clears them). Coordinates keep
    /// the value only when it parses; the year keeps its raw text so an
    /// out-of-range entry stays visible next to its error.
    pub fn set_text(&mut self, field: DraftField, value: String) {
        let blank = value.trim().is_empty();
        match field {
            DraftField::CountryCode => self.country_code = GccCountry::from_code(&value),
            DraftField::MobileNumber => self.mobile_number = value,
            DraftField::NationalId => self.national_id = value,
            DraftField::ReporterName => self.reporter_name = value,
            DraftField::ReporterEmail => self.reporter_email = value,
            DraftField::PlateNumber => self.plate_number = value,
            DraftField::PlateCountry => self.plate_country = GccCountry::from_code(&value),
            DraftField::VehicleType => self.vehicle_type = VehicleType::from_code(&value),
            DraftField::VehicleMake => self.vehicle_make = value,
            DraftField::VehicleModel => self.vehicle_model = value,
            DraftField::VehicleYear => self.vehicle_year = value,
            DraftField::VehicleColor => self.vehicle_color = value,
            DraftField::PolicyNumber => self.policy_number = value,
            DraftField::CoverageType => self.coverage_type = CoverageType::from_code(&value),
            DraftField::IncidentDate => self.incident_date = value,
            DraftField::IncidentTime => self.incident_time = value,
            DraftField::IncidentLocation => self.incident_location = value,
            DraftField::Latitude => {
                self.latitude = if blank { None } else { value.trim().parse().ok() }
            }
            DraftField::Longitude => {
                self.longitude = if blank { None } else { value.trim().parse().ok() }
            }
            DraftField::Description => self.description = value,
            DraftField::PoliceReportNumber => self.police_report_number = value,
            DraftField::IsFleet
            | DraftField::IsDrivable
            | DraftField::HasInjuries
            | DraftField::ThirdPartyInvolved
            | DraftField::Attachments => {}
        }
    }

    /// Set a checkbox field; ignored for non-boolean fields
    pub fn set_flag(&mut self, field: DraftField, value: bool) {
        match field {
            DraftField::IsFleet => self.is_fleet = value,
            DraftField::IsDrivable => self.is_drivable = value,
            DraftField::HasInjuries => self.has_injuries = value,
            DraftField::ThirdPartyInvolved => self.third_party_involved = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [DraftField; 5] = [
        DraftField::CountryCode,
        DraftField::MobileNumber,
        DraftField::NationalId,
        DraftField::IncidentDate,
        DraftField::PlateNumber,
    ];

    #[test]
    fn test_required_fields() {
        for field in REQUIRED {
            assert!(field.is_required(), "{:?} should be required", field);
        }
        assert!(!DraftField::ReporterEmail.is_required());
        assert!(!DraftField::Attachments.is_required());
    }

    #[test]
    fn test_empty_required_fields_each_produce_an_error() {
        let mut draft = ClaimDraft::default();
        draft.set_text(DraftField::CountryCode, String::new());

        let errors = validate_fields(&draft, &REQUIRED);

        assert_eq!(errors.len(), REQUIRED.len());
        assert!(errors.iter().all(|e| e.failure == ValidationFailure::Required));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut draft = ClaimDraft::default();
        draft.set_text(DraftField::ReporterEmail, "someone@".into());
        let errors = validate_fields(&draft, &[DraftField::ReporterName, DraftField::ReporterEmail]);
        assert_eq!(
            errors,
            vec![FieldError {
                field: DraftField::ReporterEmail,
                failure: ValidationFailure::InvalidFormat
            }]
        );
    }

    #[test]
    fn test_select_and_number_parsing() {
        let mut draft = ClaimDraft::default();
        draft.set_text(DraftField::VehicleType, "MOTORCYCLE".into());
        draft.set_text(DraftField::VehicleYear, "2021".into());
        draft.set_text(DraftField::Latitude, "25.2048".into());
        assert_eq!(draft.vehicle_type, Some(VehicleType::Motorcycle));
        assert_eq!(draft.vehicle_year, "2021");
        assert_eq!(DraftField::Latitude.value_of(&draft), "25.2048");

        draft.set_text(DraftField::VehicleYear, "".into());
        draft.set_text(DraftField::CoverageType, "unknown".into());
        assert_eq!(draft.vehicle_year, "");
        assert_eq!(draft.coverage_type, None);
    }

    #[test]
    fn test_flags() {
        let mut draft = ClaimDraft::default();
        draft.set_flag(DraftField::HasInjuries, true);
        draft.set_flag(DraftField::PlateNumber, true);
        assert_eq!(DraftField::HasInjuries.flag_of(&draft), Some(true));
        assert_eq!(DraftField::PlateNumber.flag_of(&draft), None);
        assert_eq!(draft.plate_number, "");
    }

    #[test]
    fn test_vehicle_year_outside_backend_range_is_reported() {
        let mut draft = ClaimDraft::default();
        draft.set_text(DraftField::VehicleYear, "99999".into());
        assert_eq!(DraftField::VehicleYear.value_of(&draft), "99999");
        assert_eq!(
            DraftField::VehicleYear.validate(&draft),
            Err(ValidationFailure::OutOfRange { min: 1900, max: 2100 })
        );

        draft.set_text(DraftField::VehicleYear, "2019".into());
        assert_eq!(DraftField::VehicleYear.validate(&draft), Ok(()));
    }
}
