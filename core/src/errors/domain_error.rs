//! Domain-specific error types for the verification lifecycle and its
//! collaborators.
//!
//! Every rejected transition carries a distinguishable reason so the API
//! layer can render the correct remediation (retry, resend, dead-end).
//! Transient collaborator failures are marked retryable; everything else
//! is terminal for the current attempt and requires explicit user action.

use thiserror::Error;

/// Convenience alias for domain results
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by the domain layer
#[derive(Error, Debug)]
pub enum DomainError {
    /// The requested record does not exist
    #[error("Record not found")]
    NotFound,

    /// The record is no longer pending (already active or disabled)
    #[error("Record already finalized")]
    AlreadyFinalized,

    /// The outstanding verification code has expired
    #[error("Verification code expired")]
    Expired,

    /// The submitted code does not match the outstanding one, or no code
    /// is outstanding
    #[error("Invalid verification code")]
    InvalidCode,

    /// The notification sender reported non-success; nothing was persisted
    #[error("Mail dispatch failed: {reason}")]
    DispatchFailed { reason: String },

    /// Transient record store failure
    #[error("Record store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// A conditional update matched zero rows: a concurrent request
    /// changed the record first
    #[error("Concurrent update detected")]
    PreconditionFailed,

    /// Requested status change is not allowed from the current status
    #[error("Invalid status transition from '{from}'")]
    InvalidTransition { from: String },

    /// Input failed domain validation
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The account directory rejected the supplied credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Login refused until the primary email is verified
    #[error("Email verification required")]
    VerificationRequired,

    /// The account directory reported the account already exists
    #[error("Account already exists")]
    AccountAlreadyExists,

    /// The account directory could not be reached
    #[error("Account directory unavailable: {reason}")]
    DirectoryUnavailable { reason: String },
}

impl DomainError {
    /// Stable error code for programmatic handling in API responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound => "not_found",
            DomainError::AlreadyFinalized => "already_finalized",
            DomainError::Expired => "code_expired",
            DomainError::InvalidCode => "invalid_code",
            DomainError::DispatchFailed { .. } => "dispatch_failed",
            DomainError::StoreUnavailable { .. } => "store_unavailable",
            DomainError::PreconditionFailed => "precondition_failed",
            DomainError::InvalidTransition { .. } => "invalid_transition",
            DomainError::Validation { .. } => "validation_error",
            DomainError::AuthenticationFailed => "authentication_failed",
            DomainError::VerificationRequired => "verification_required",
            DomainError::AccountAlreadyExists => "account_already_exists",
            DomainError::DirectoryUnavailable { .. } => "directory_unavailable",
        }
    }

    /// Whether the caller may retry the same request unchanged.
    ///
    /// Only transient collaborator failures qualify; rejected transitions
    /// need explicit user action first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::DispatchFailed { .. }
                | DomainError::StoreUnavailable { .. }
                | DomainError::DirectoryUnavailable { .. }
        )
    }

    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a store failure
    pub fn store(reason: impl Into<String>) -> Self {
        DomainError::StoreUnavailable {
            reason: reason.into(),
        }
    }
}
