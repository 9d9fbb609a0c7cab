//! `POST /fnol`: request body, acknowledgement and idempotency key

pub mod idempotency;
pub mod request;
pub mod response;

pub use idempotency::{IdempotencyKey, IDEMPOTENCY_HEADER};
pub use request::{AttachmentRequest, SubmitFnolRequest};
pub use response::SubmissionResult;
