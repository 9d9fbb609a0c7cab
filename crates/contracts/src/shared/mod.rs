pub mod error;
pub mod metadata;
pub mod serde_utils;
