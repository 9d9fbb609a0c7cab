//! Display tables for claim status, severity and processing route

use crate::shared::i18n::{Locale, TextKey};

const RED: (&str, &str) = ("#ef4444", "#fef2f2");
const AMBER: (&str, &str) = ("#f59e0b", "#fffbeb");
const GREEN: (&str, &str) = ("#22c55e", "#f0fdf4");
const BLUE: (&str, &str) = ("#0ea5e9", "#f0f9ff");
const GREY: (&str, &str) = ("#6b7280", "#f9fafb");

/// Catalog text, or a backend value shown as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLabel {
    Key(TextKey),
    Raw(String),
}

impl DisplayLabel {
    pub fn text(&self, locale: &Locale) -> String {
        match self {
            DisplayLabel::Key(key) => locale.t(*key).to_string(),
            DisplayLabel::Raw(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    pub label: DisplayLabel,
    pub color: &'static str,
    pub bg_color: &'static str,
    /// Badge variant class suffix
    pub badge_variant: &'static str,
}

impl DisplayValue {
    fn new(label: DisplayLabel, (color, bg_color): (&'static str, &'static str), badge_variant: &'static str) -> Self {
        Self {
            label,
            color,
            bg_color,
            badge_variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDisplay {
    pub value: DisplayValue,
    /// Percentage shown in the progress bar
    pub progress: u8,
}

pub fn status_display(status: &str) -> DisplayValue {
    use DisplayLabel::Key;
    match status {
        "SUBMITTED" => DisplayValue::new(Key(TextKey::StatusSubmitted), BLUE, "primary"),
        "IN_PROGRESS" => DisplayValue::new(Key(TextKey::StatusInProgress), AMBER, "warning"),
        "COMPLETED" => DisplayValue::new(Key(TextKey::StatusCompleted), GREEN, "success"),
        "REJECTED" => DisplayValue::new(Key(TextKey::StatusRejected), RED, "error"),
        "" => DisplayValue::new(Key(TextKey::Unknown), GREY, "neutral"),
        other => DisplayValue::new(DisplayLabel::Raw(other.to_string()), GREY, "neutral"),
    }
}

pub fn severity_display(severity: &str) -> DisplayValue {
    use DisplayLabel::Key;
    match severity {
        "HIGH" => DisplayValue::new(Key(TextKey::SeverityHigh), RED, "error"),
        "MEDIUM" => DisplayValue::new(Key(TextKey::SeverityMedium), AMBER, "warning"),
        "LOW" => DisplayValue::new(Key(TextKey::SeverityLow), GREEN, "success"),
        _ => DisplayValue::new(Key(TextKey::Unknown), GREY, "neutral"),
    }
}

pub fn route_display(route: &str) -> RouteDisplay {
    use DisplayLabel::Key;
    let (value, progress) = match route {
        "complex" => (DisplayValue::new(Key(TextKey::RouteComplex), RED, "error"), 30),
        "standard" => (DisplayValue::new(Key(TextKey::RouteStandard), BLUE, "primary"), 50),
        "fast-track" => (DisplayValue::new(Key(TextKey::RouteFastTrack), GREEN, "success"), 70),
        _ => (DisplayValue::new(Key(TextKey::RoutePending), GREY, "neutral"), 10),
    };
    RouteDisplay { value, progress }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::LanguageCode;

    #[test]
    fn test_known_statuses() {
        let submitted = status_display("SUBMITTED");
        assert_eq!(submitted.label, DisplayLabel::Key(TextKey::StatusSubmitted));
        assert_eq!(submitted.color, "#0ea5e9");
        assert_eq!(status_display("REJECTED").bg_color, "#fef2f2");
        assert_eq!(status_display("IN_PROGRESS").badge_variant, "warning");
    }

    #[test]
    fn test_unrecognised_status_shows_raw_value() {
        let locale = Locale::new(LanguageCode::En);
        let pending = status_display("PENDING_REVIEW");
        assert_eq!(pending.label.text(&locale), "PENDING_REVIEW");
        assert_eq!(pending.color, "#6b7280");
        assert_eq!(status_display("").label.text(&locale), "Unknown");
    }

    #[test]
    fn test_status_match_is_case_sensitive() {
        assert_eq!(
            status_display("submitted").label,
            DisplayLabel::Raw("submitted".into())
        );
    }

    #[test]
    fn test_severity_labels() {
        let locale = Locale::new(LanguageCode::En);
        assert_eq!(severity_display("HIGH").label.text(&locale), "High Priority");
        assert_eq!(severity_display("LOW").color, "#22c55e");
        assert_eq!(severity_display("CRITICAL").label, DisplayLabel::Key(TextKey::Unknown));
    }

    #[test]
    fn test_route_progress() {
        assert_eq!(route_display("complex").progress, 30);
        assert_eq!(route_display("standard").progress, 50);
        assert_eq!(route_display("fast-track").progress, 70);

        let pending = route_display("");
        assert_eq!(pending.progress, 10);
        assert_eq!(pending.value.label, DisplayLabel::Key(TextKey::RoutePending));
        assert_eq!(route_display("FAST_TRACK").progress, 10);
    }
}
