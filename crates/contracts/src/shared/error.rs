use serde::{Deserialize, Serialize};

/// Error envelope returned by the FNOL backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub field_errors: Vec<ApiFieldError>,
}

/// Field-level validation error reported by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFieldError {
    pub field: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Text worth showing to the user: the top-level message, otherwise the
    /// first field error that carries one.
    pub fn display_message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.field_errors.iter().find_map(|fe| {
                    fe.message
                        .as_deref()
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(|m| format!("{}: {}", fe.field, m))
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_top_level_message() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"status":400,"error":"Validation Error","message":"Invalid mobile number",
                "fieldErrors":[{"field":"mobileNumber","message":"bad prefix"}]}"#,
        )
        .unwrap();
        assert_eq!(body.display_message().as_deref(), Some("Invalid mobile number"));
    }

    #[test]
    fn test_falls_back_to_field_error() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"status":400,"fieldErrors":[{"field":"nationalId","code":"PATTERN","message":"Invalid Emirates ID"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.display_message().as_deref(),
            Some("nationalId: Invalid Emirates ID")
        );
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let body = ApiErrorBody {
            message: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(body.display_message(), None);
    }
}
