use serde::{Deserialize, Serialize};

/// Direction in which a script is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value of the HTML `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Display languages supported by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Ar,
    Hi,
    Ur,
    Ml,
    Tl,
}

impl LanguageCode {
    /// Lower-case code used in URLs, storage and the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ar => "ar",
            LanguageCode::Hi => "hi",
            LanguageCode::Ur => "ur",
            LanguageCode::Ml => "ml",
            LanguageCode::Tl => "tl",
        }
    }

    /// Upper-case code sent to the backend as `preferredLanguage`
    pub fn wire_code(&self) -> String {
        self.code().to_ascii_uppercase()
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ar => "Arabic",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Ur => "Urdu",
            LanguageCode::Ml => "Malayalam",
            LanguageCode::Tl => "Tagalog",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ar => "العربية",
            LanguageCode::Hi => "हिन्दी",
            LanguageCode::Ur => "اردو",
            LanguageCode::Ml => "മലയാളം",
            LanguageCode::Tl => "Filipino",
        }
    }

    pub fn script(&self) -> &'static str {
        match self {
            LanguageCode::En | LanguageCode::Tl => "Latin",
            LanguageCode::Ar => "Arabic",
            LanguageCode::Hi => "Devanagari",
            LanguageCode::Ur => "Nastaliq",
            LanguageCode::Ml => "Malayalam",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            LanguageCode::Ar | LanguageCode::Ur => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    pub fn all() -> Vec<LanguageCode> {
        vec![
            LanguageCode::En,
            LanguageCode::Ar,
            LanguageCode::Hi,
            LanguageCode::Ur,
            LanguageCode::Ml,
            LanguageCode::Tl,
        ]
    }

    /// Parse a language tag. Region subtags are ignored (`ar-AE` is Arabic).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(LanguageCode::En),
            "ar" => Some(LanguageCode::Ar),
            "hi" => Some(LanguageCode::Hi),
            "ur" => Some(LanguageCode::Ur),
            "ml" => Some(LanguageCode::Ml),
            "tl" | "fil" => Some(LanguageCode::Tl),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_languages() {
        let rtl: Vec<_> = LanguageCode::all()
            .into_iter()
            .filter(|l| l.direction().is_rtl())
            .collect();
        assert_eq!(rtl, vec![LanguageCode::Ar, LanguageCode::Ur]);
    }

    #[test]
    fn test_from_code_accepts_region_tags() {
        assert_eq!(LanguageCode::from_code("ar-AE"), Some(LanguageCode::Ar));
        assert_eq!(LanguageCode::from_code(" EN "), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_code("fil_PH"), Some(LanguageCode::Tl));
        assert_eq!(LanguageCode::from_code("fr"), None);
        assert_eq!(LanguageCode::from_code(""), None);
    }

    #[test]
    fn test_wire_code_is_upper_case() {
        assert_eq!(LanguageCode::Ml.wire_code(), "ML");
    }
}
