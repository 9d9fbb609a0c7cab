use serde::{Deserialize, Serialize};

/// Motor policy coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CoverageType {
    #[default]
    #[serde(rename = "COMPREHENSIVE")]
    Comprehensive,
    /// Third party liability only
    #[serde(rename = "TPL")]
    ThirdPartyLiability,
}

impl CoverageType {
    pub fn code(&self) -> &'static str {
        match self {
            CoverageType::Comprehensive => "COMPREHENSIVE",
            CoverageType::ThirdPartyLiability => "TPL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CoverageType::Comprehensive => "Comprehensive",
            CoverageType::ThirdPartyLiability => "Third Party Liability",
        }
    }

    pub fn all() -> Vec<CoverageType> {
        vec![CoverageType::Comprehensive, CoverageType::ThirdPartyLiability]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "COMPREHENSIVE" => Some(CoverageType::Comprehensive),
            "TPL" => Some(CoverageType::ThirdPartyLiability),
            _ => None,
        }
    }
}
