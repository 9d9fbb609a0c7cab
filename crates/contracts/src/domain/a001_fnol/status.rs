use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Processing state of a submitted claim, as returned by `GET /fnol/{id}/status`.
///
/// Status, severity and route stay plain strings: the backend may add values the
/// client does not know yet, and those are displayed raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub fnol_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: String,
    /// ISO-8601 local date-time
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_status_response() {
        let json = r#"{
            "fnolId": "FNOL-UAE-2025-000042",
            "status": "IN_PROGRESS",
            "severityLevel": "MEDIUM",
            "route": "standard",
            "createdAt": "2025-03-01T09:15:00",
            "updatedAt": null
        }"#;
        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.fnol_id, "FNOL-UAE-2025-000042");
        assert_eq!(snapshot.route, "standard");
        assert_eq!(snapshot.updated_at, None);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"fnolId":"X"}"#).unwrap();
        assert_eq!(snapshot.status, "");
        assert_eq!(snapshot.severity_level, "");
    }

    #[test]
    fn test_null_columns_read_as_empty() {
        let json = r#"{
            "fnolId": "FNOL-UAE-2025-000001",
            "status": "SUBMITTED",
            "severityLevel": null,
            "route": null,
            "createdAt": "2025-03-01T09:15:00",
            "updatedAt": null
        }"#;
        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.status, "SUBMITTED");
        assert_eq!(snapshot.severity_level, "");
        assert_eq!(snapshot.route, "");
    }
}
