//! Wire contracts of the motor FNOL intake
//!
//! Shared by the browser client and anything else that talks to the FNOL API:
//! the claim draft and its field rules, the submit/status DTOs and the closed
//! enumerations used by both.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
