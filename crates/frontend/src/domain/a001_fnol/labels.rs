//! Catalog keys for draft fields and their validation failures

use crate::shared::i18n::TextKey;
use contracts::domain::a001_fnol::{DraftField, FieldError};
use contracts::shared::metadata::{ValidationFailure, WidgetKind};

pub fn label_key(field: DraftField) -> TextKey {
    match field {
        DraftField::CountryCode => TextKey::Country,
        DraftField::MobileNumber => TextKey::MobileNumber,
        DraftField::NationalId => TextKey::NationalId,
        DraftField::ReporterName => TextKey::ReporterName,
        DraftField::ReporterEmail => TextKey::ReporterEmail,
        DraftField::PlateNumber => TextKey::PlateNumber,
        DraftField::PlateCountry => TextKey::PlateCountry,
        DraftField::VehicleType => TextKey::VehicleType,
        DraftField::VehicleMake => TextKey::VehicleMake,
        DraftField::VehicleModel => TextKey::VehicleModel,
        DraftField::VehicleYear => TextKey::VehicleYear,
        DraftField::VehicleColor => TextKey::VehicleColor,
        DraftField::PolicyNumber => TextKey::PolicyNumber,
        DraftField::CoverageType => TextKey::CoverageType,
        DraftField::IsFleet => TextKey::IsFleet,
        DraftField::IncidentDate => TextKey::IncidentDate,
        DraftField::IncidentTime => TextKey::IncidentTime,
        DraftField::IncidentLocation => TextKey::IncidentLocation,
        DraftField::Latitude => TextKey::Latitude,
        DraftField::Longitude => TextKey::Longitude,
        DraftField::Description => TextKey::Description,
        DraftField::IsDrivable => TextKey::IsDrivable,
        DraftField::HasInjuries => TextKey::HasInjuries,
        DraftField::ThirdPartyInvolved => TextKey::ThirdPartyInvolved,
        DraftField::PoliceReportNumber => TextKey::PoliceReportNumber,
        DraftField::Attachments => TextKey::AttachmentsTitle,
    }
}

pub fn error_key(error: &FieldError) -> TextKey {
    match error.failure {
        ValidationFailure::Required => TextKey::ValidationRequired,
        ValidationFailure::InvalidFormat if error.field.metadata().widget == WidgetKind::Email => {
            TextKey::ValidationInvalidEmail
        }
        ValidationFailure::InvalidFormat => TextKey::ValidationInvalidFormat,
        ValidationFailure::TooLong(_) => TextKey::ValidationTooLong,
        ValidationFailure::OutOfRange { .. } => TextKey::ValidationOutOfRange,
    }
}

/// Values substituted into the failure's message template
pub fn error_args(error: &FieldError) -> Vec<String> {
    match error.failure {
        ValidationFailure::OutOfRange { min, max } => vec![min.to_string(), max.to_string()],
        ValidationFailure::TooLong(max) => vec![max.to_string()],
        ValidationFailure::Required | ValidationFailure::InvalidFormat => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format_error_has_its_own_text() {
        let email = FieldError {
            field: DraftField::ReporterEmail,
            failure: ValidationFailure::InvalidFormat,
        };
        let other = FieldError {
            field: DraftField::IncidentTime,
            failure: ValidationFailure::InvalidFormat,
        };
        assert_eq!(error_key(&email), TextKey::ValidationInvalidEmail);
        assert_eq!(error_key(&other), TextKey::ValidationInvalidFormat);
    }

    #[test]
    fn test_year_range_message_names_the_bounds() {
        let error = FieldError {
            field: DraftField::VehicleYear,
            failure: ValidationFailure::OutOfRange { min: 1900, max: 2100 },
        };
        let args = error_args(&error);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let text = crate::shared::i18n::fill(
            crate::shared::i18n::translate(contracts::enums::LanguageCode::En, error_key(&error)),
            &args,
        );
        assert_eq!(text, "Must be between 1900 and 2100");
    }
}
