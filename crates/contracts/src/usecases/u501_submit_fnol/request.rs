use crate::domain::a001_fnol::{AttachmentDescriptor, ClaimDraft};
use crate::enums::{AttachmentType, LanguageCode};
use serde::{Deserialize, Serialize};

/// Body of `POST /fnol`.
///
/// Blank optional text is sent as an absent property, never as `""`: the
/// backend parses date/time and enum fields and rejects empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFnolRequest {
    pub country_code: String,
    pub mobile_number: String,
    pub national_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,

    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_type: Option<String>,
    pub is_fleet: bool,

    pub incident_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_drivable: bool,
    pub has_injuries: bool,
    pub third_party_involved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub police_report_number: Option<String>,

    /// Upper-cased language code, e.g. "AR"
    pub preferred_language: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRequest {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl AttachmentRequest {
    /// `None` for an entry whose URL was never filled in
    fn from_descriptor(descriptor: &AttachmentDescriptor) -> Option<Self> {
        Some(Self {
            url: non_blank(&descriptor.url)?,
            kind: descriptor.kind,
            description: non_blank(&descriptor.description),
        })
    }
}

impl SubmitFnolRequest {
    pub fn from_draft(draft: &ClaimDraft, language: LanguageCode) -> Self {
        Self {
            country_code: draft.country_code.map(|c| c.code().to_string()).unwrap_or_default(),
            mobile_number: draft.mobile_number.trim().to_string(),
            national_id: draft.national_id.trim().to_string(),
            reporter_name: non_blank(&draft.reporter_name),
            reporter_email: non_blank(&draft.reporter_email),
            plate_number: draft.plate_number.trim().to_string(),
            plate_country: draft.plate_country.map(|c| c.code().to_string()),
            vehicle_type: draft.vehicle_type.map(|t| t.code().to_string()),
            vehicle_make: non_blank(&draft.vehicle_make),
            vehicle_model: non_blank(&draft.vehicle_model),
            vehicle_year: draft.vehicle_year.trim().parse().ok(),
            vehicle_color: non_blank(&draft.vehicle_color),
            policy_number: non_blank(&draft.policy_number),
            coverage_type: draft.coverage_type.map(|t| t.code().to_string()),
            is_fleet: draft.is_fleet,
            incident_date: draft.incident_date.trim().to_string(),
            incident_time: non_blank(&draft.incident_time),
            incident_location: non_blank(&draft.incident_location),
            latitude: draft.latitude,
            longitude: draft.longitude,
            description: non_blank(&draft.description),
            is_drivable: draft.is_drivable,
            has_injuries: draft.has_injuries,
            third_party_involved: draft.third_party_involved,
            police_report_number: non_blank(&draft.police_report_number),
            preferred_language: language.wire_code(),
            attachments: draft
                .attachments
                .iter()
                .filter_map(AttachmentRequest::from_descriptor)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ClaimDraft {
        ClaimDraft {
            mobile_number: "+971501234567".into(),
            national_id: "784-1990-1234567-1".into(),
            plate_number: "Dubai A 12345".into(),
            incident_date: "2025-04-02".into(),
            ..ClaimDraft::default()
        }
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let request = SubmitFnolRequest::from_draft(&filled_draft(), LanguageCode::Ar);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["countryCode"], "UAE");
        assert_eq!(json["vehicleType"], "SEDAN");
        assert_eq!(json["coverageType"], "COMPREHENSIVE");
        assert_eq!(json["preferredLanguage"], "AR");
        assert_eq!(json["isDrivable"], true);
        assert!(json.get("incidentTime").is_none());
        assert!(json.get("reporterEmail").is_none());
        assert!(json.get("latitude").is_none());
    }

    #[test]
    fn test_attachments_without_url_are_dropped() {
        let mut draft = filled_draft();
        draft.add_attachment();
        let index = draft.add_attachment();
        draft.set_attachment_url(index, " https://files.example.ae/clip.mp4 ".into());

        let request = SubmitFnolRequest::from_draft(&draft, LanguageCode::En);

        assert_eq!(
            request.attachments,
            vec![AttachmentRequest {
                url: "https://files.example.ae/clip.mp4".into(),
                kind: AttachmentType::Video,
                description: None,
            }]
        );
    }

    #[test]
    fn test_vehicle_year_is_sent_as_a_number() {
        let mut draft = filled_draft();
        draft.vehicle_year = " 2021 ".into();
        let json = serde_json::to_value(SubmitFnolRequest::from_draft(&draft, LanguageCode::En)).unwrap();
        assert_eq!(json["vehicleYear"], 2021);

        draft.vehicle_year = String::new();
        let json = serde_json::to_value(SubmitFnolRequest::from_draft(&draft, LanguageCode::En)).unwrap();
        assert!(json.get("vehicleYear").is_none());
    }
}
