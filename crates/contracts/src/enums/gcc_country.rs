use serde::{Deserialize, Serialize};

/// GCC countries accepted by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GccCountry {
    #[default]
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "SAU")]
    SaudiArabia,
    #[serde(rename = "KWT")]
    Kuwait,
    #[serde(rename = "QAT")]
    Qatar,
    #[serde(rename = "BHR")]
    Bahrain,
    #[serde(rename = "OMN")]
    Oman,
}

impl GccCountry {
    /// Wire code sent as `countryCode` / `plateCountry`
    pub fn code(&self) -> &'static str {
        match self {
            GccCountry::Uae => "UAE",
            GccCountry::SaudiArabia => "SAU",
            GccCountry::Kuwait => "KWT",
            GccCountry::Qatar => "QAT",
            GccCountry::Bahrain => "BHR",
            GccCountry::Oman => "OMN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GccCountry::Uae => "United Arab Emirates",
            GccCountry::SaudiArabia => "Saudi Arabia",
            GccCountry::Kuwait => "Kuwait",
            GccCountry::Qatar => "Qatar",
            GccCountry::Bahrain => "Bahrain",
            GccCountry::Oman => "Oman",
        }
    }

    /// International dialling prefix, used as the mobile number placeholder
    pub fn dial_prefix(&self) -> &'static str {
        match self {
            GccCountry::Uae => "+971",
            GccCountry::SaudiArabia => "+966",
            GccCountry::Kuwait => "+965",
            GccCountry::Qatar => "+974",
            GccCountry::Bahrain => "+973",
            GccCountry::Oman => "+968",
        }
    }

    /// Local name of the national identity document
    pub fn national_id_name(&self) -> &'static str {
        match self {
            GccCountry::Uae => "Emirates ID",
            GccCountry::SaudiArabia => "Iqama/National ID",
            GccCountry::Kuwait => "Civil ID",
            GccCountry::Qatar => "QID",
            GccCountry::Bahrain => "CPR",
            GccCountry::Oman => "National ID",
        }
    }

    pub fn all() -> Vec<GccCountry> {
        vec![
            GccCountry::Uae,
            GccCountry::SaudiArabia,
            GccCountry::Kuwait,
            GccCountry::Qatar,
            GccCountry::Bahrain,
            GccCountry::Oman,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "UAE" => Some(GccCountry::Uae),
            "SAU" => Some(GccCountry::SaudiArabia),
            "KWT" => Some(GccCountry::Kuwait),
            "QAT" => Some(GccCountry::Qatar),
            "BHR" => Some(GccCountry::Bahrain),
            "OMN" => Some(GccCountry::Oman),
            _ => None,
        }
    }
}

impl std::fmt::Display for GccCountry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for country in GccCountry::all() {
            assert_eq!(GccCountry::from_code(country.code()), Some(country));
        }
        assert_eq!(GccCountry::from_code(" uae "), Some(GccCountry::Uae));
        assert_eq!(GccCountry::from_code("USA"), None);
    }

    #[test]
    fn test_serializes_as_wire_code() {
        let json = serde_json::to_string(&GccCountry::SaudiArabia).unwrap();
        assert_eq!(json, "\"SAU\"");
    }
}
