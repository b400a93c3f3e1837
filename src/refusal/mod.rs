//! Refusal system for harness errors

pub mod codes;
pub mod envelope;

pub use codes::RefusalCode;
pub use envelope::{RefusalDetail, RefusalEnvelope};
