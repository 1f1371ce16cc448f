//! Verification service module for email ownership proofs
//!
//! This module provides the complete verification code lifecycle:
//! - random code generation and one-way hashing
//! - dispatch of the plaintext code through the notification sender
//! - hashed-code storage with an absolute expiry
//! - constant-time validation of submitted codes
//! - the pending -> active state transition, race-safe

mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{CodeAlphabet, VerificationConfig};
pub use generator::CodeGenerator;
pub use service::VerificationService;
pub use traits::Mailer;
pub use types::IssueCodeResult;
