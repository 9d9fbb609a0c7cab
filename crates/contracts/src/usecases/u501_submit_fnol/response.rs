use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Acknowledgement of `POST /fnol`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub fnol_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// The backend already had a claim for this idempotency key
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
