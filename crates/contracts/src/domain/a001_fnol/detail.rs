use super::aggregate::AttachmentDescriptor;
use super::status::StatusSnapshot;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Full claim projection returned by `GET /fnol/{id}`.
///
/// Enumerated values are kept as the strings the backend stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FnolDetail {
    pub fnol_id: String,
    pub process_instance_key: Option<String>,

    pub country_code: String,
    pub mobile_number: String,
    pub national_id: String,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,

    pub plate_number: String,
    pub vehicle_type: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<u16>,
    pub vehicle_color: Option<String>,
    pub policy_number: Option<String>,
    pub coverage_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_fleet: bool,

    pub incident_date: String,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_drivable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_injuries: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub third_party_involved: bool,
    pub police_report_number: Option<String>,

    pub preferred_language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<AttachmentDescriptor>,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub severity_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl FnolDetail {
    /// Processing part of the detail, the same shape the status endpoint returns
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            fnol_id: self.fnol_id.clone(),
            status: self.status.clone(),
            severity_level: self.severity_level.clone(),
            route: self.route.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AttachmentType;

    #[test]
    fn test_deserialize_sparse_detail() {
        // NON_NULL on the server side: absent optionals are simply missing
        let json = r#"{
            "fnolId": "FNOL-KWT-2025-000007",
            "countryCode": "KWT",
            "mobileNumber": "+96550001234",
            "nationalId": "289010112345",
            "plateNumber": "12/34567",
            "incidentDate": "2025-02-10",
            "isDrivable": false,
            "hasInjuries": true,
            "attachments": [{"url": "https://x/a.jpg", "type": "IMAGE", "description": ""}],
            "status": "SUBMITTED",
            "severityLevel": "HIGH",
            "route": "complex",
            "createdAt": "2025-02-10T18:01:02"
        }"#;
        let detail: FnolDetail = serde_json::from_str(json).unwrap();
        assert!(detail.has_injuries);
        assert!(!detail.is_fleet);
        assert_eq!(detail.reporter_email, None);
        assert_eq!(detail.attachments[0].kind, AttachmentType::Image);

        let snapshot = detail.snapshot();
        assert_eq!(snapshot.severity_level, "HIGH");
        assert_eq!(snapshot.route, "complex");
    }

    #[test]
    fn test_nullable_columns_do_not_fail_decoding() {
        let json = r#"{
            "fnolId": "FNOL-OMN-2025-000011",
            "countryCode": "OM",
            "isFleet": null,
            "attachments": null,
            "severityLevel": null,
            "route": null
        }"#;
        let detail: FnolDetail = serde_json::from_str(json).unwrap();
        assert!(!detail.is_fleet);
        assert!(detail.attachments.is_empty());
        assert_eq!(detail.snapshot().route, "");
    }
}
