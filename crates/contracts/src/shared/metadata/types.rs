//! Core field metadata type

use super::field_type::WidgetKind;
use super::validation::ValidationRules;

/// Static description of one editable field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// camelCase key, identical to the JSON property name
    pub key: &'static str,
    pub widget: WidgetKind,
    pub rules: ValidationRules,
}

impl FieldMetadata {
    pub const fn new(key: &'static str, widget: WidgetKind, rules: ValidationRules) -> Self {
        Self { key, widget, rules }
    }

    pub const fn is_required(&self) -> bool {
        self.rules.is_required()
    }
}
