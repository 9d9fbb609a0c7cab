use serde::{Deserialize, Serialize};

/// Application metadata served by `GET /info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub application: String,
    pub version: String,
    #[serde(default)]
    pub demo_mode: bool,
    #[serde(default)]
    pub supported_countries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_info_payload() {
        let info: AppInfo = serde_json::from_str(
            r#"{"application":"GCC Motor FNOL","version":"1.0.0","demoMode":true,
                "supportedCountries":["UAE","SAU"],"timestamp":"2025-01-10T09:00:00"}"#,
        )
        .unwrap();
        assert!(info.demo_mode);
        assert_eq!(info.supported_countries, vec!["UAE", "SAU"]);
    }
}
