//! Account directory integration
//!
//! Credential storage and token minting live in an external account
//! directory service. This module defines the port the rest of the
//! crate talks to; the HTTP client lives in the infrastructure layer.

use async_trait::async_trait;

use crate::domain::value_objects::session::SessionTokens;
use crate::errors::DomainResult;

/// Client-side port to the external account directory.
///
/// Implementations translate directory responses into domain errors:
/// rejected credentials become `AuthenticationFailed`, a login against
/// an unverified account becomes `VerificationRequired`, a duplicate
/// registration becomes `AccountAlreadyExists`, and transport failures
/// become `DirectoryUnavailable`.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Create a new account in the directory
    async fn register(&self, email: &str, password: &str) -> DomainResult<()>;

    /// Exchange credentials for session tokens
    async fn login(&self, email: &str, password: &str) -> DomainResult<SessionTokens>;

    /// Start a password reset for the given address
    async fn forgot_password(&self, email: &str) -> DomainResult<()>;
}
