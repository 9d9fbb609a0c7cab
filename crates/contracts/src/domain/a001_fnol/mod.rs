pub mod aggregate;
pub mod detail;
pub mod fields;
pub mod status;

pub use aggregate::{AttachmentDescriptor, ClaimDraft};
pub use detail::FnolDetail;
pub use fields::{validate_fields, DraftField, FieldError};
pub use status::StatusSnapshot;
