//! Validation rules for metadata fields

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Text shapes a field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Email,
}

impl TextFormat {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            TextFormat::Email => EMAIL_RE.is_match(value),
        }
    }
}

/// Why a value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    TooLong(usize),
    InvalidFormat,
    OutOfRange { min: i64, max: i64 },
}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub max_length: Option<usize>,
    pub format: Option<TextFormat>,
    /// Inclusive integer bounds; the value must parse as an integer
    pub range: Option<(i64, i64)>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            max_length: None,
            format: None,
            range: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Optional e-mail address
    pub const fn email() -> Self {
        Self {
            format: Some(TextFormat::Email),
            ..Self::none()
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Blank optional values pass without any further check.
    pub fn validate_string(&self, value: &str) -> Result<(), ValidationFailure> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(ValidationFailure::Required)
            } else {
                Ok(())
            };
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(ValidationFailure::TooLong(max));
            }
        }

        if let Some(format) = self.format {
            if !format.matches(trimmed) {
                return Err(ValidationFailure::InvalidFormat);
            }
        }

        if let Some((min, max)) = self.range {
            let n: i64 = trimmed.parse().map_err(|_| ValidationFailure::InvalidFormat)?;
            if !(min..=max).contains(&n) {
                return Err(ValidationFailure::OutOfRange { min, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(rules.validate_string(""), Err(ValidationFailure::Required));
        assert_eq!(rules.validate_string("   "), Err(ValidationFailure::Required));
        assert_eq!(rules.validate_string("A12345"), Ok(()));
    }

    #[test]
    fn test_email_format() {
        let rules = ValidationRules::email();
        assert_eq!(rules.validate_string(""), Ok(()));
        assert_eq!(rules.validate_string("driver@example.ae"), Ok(()));
        assert_eq!(
            rules.validate_string("driver@example"),
            Err(ValidationFailure::InvalidFormat)
        );
        assert_eq!(
            rules.validate_string("dri ver@example.ae"),
            Err(ValidationFailure::InvalidFormat)
        );
    }

    #[test]
    fn test_length_limits_count_characters() {
        let rules = ValidationRules::none().with_max_length(3);
        assert_eq!(rules.validate_string("دبي"), Ok(()));
        assert_eq!(rules.validate_string("abcd"), Err(ValidationFailure::TooLong(3)));
    }

    #[test]
    fn test_range_is_inclusive_and_needs_an_integer() {
        let rules = ValidationRules::none().with_range(1900, 2100);
        assert_eq!(rules.validate_string(""), Ok(()));
        assert_eq!(rules.validate_string("1900"), Ok(()));
        assert_eq!(rules.validate_string(" 2100 "), Ok(()));
        assert_eq!(
            rules.validate_string("1899"),
            Err(ValidationFailure::OutOfRange { min: 1900, max: 2100 })
        );
        assert_eq!(
            rules.validate_string("99999"),
            Err(ValidationFailure::OutOfRange { min: 1900, max: 2100 })
        );
        assert_eq!(rules.validate_string("20x1"), Err(ValidationFailure::InvalidFormat));
    }
}
