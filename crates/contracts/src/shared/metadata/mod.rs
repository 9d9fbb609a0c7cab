//! Field metadata for form-backed records
//!
//! Each editable field declares how it is rendered (`WidgetKind`) and which
//! constraints apply (`ValidationRules`). All values are `'static` constants so
//! step declarations can live in plain `const` tables.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{FieldMetadata, ValidationRules, WidgetKind};
//!
//! const EMAIL: FieldMetadata = FieldMetadata {
//!     key: "reporterEmail",
//!     widget: WidgetKind::Email,
//!     rules: ValidationRules::email(),
//! };
//! assert!(EMAIL.rules.validate_string("not-an-email").is_err());
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::WidgetKind;
pub use types::FieldMetadata;
pub use validation::{TextFormat, ValidationFailure, ValidationRules};
