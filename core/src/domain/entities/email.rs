//! Email record entity for the verification code lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Status of an email record
///
/// Transitions are restricted: `Pending -> Active` happens exactly once on
/// successful verification, and `Active <-> Disabled` is a manual toggle.
/// `Active -> Pending` never happens automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    /// Ownership not yet proven; a verification code may be outstanding
    Pending,
    /// Ownership proven by a successful verification attempt
    Active,
    /// Manually disabled by the owner
    Disabled,
}

impl EmailStatus {
    /// Database string form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Pending => "pending",
            EmailStatus::Active => "active",
            EmailStatus::Disabled => "disabled",
        }
    }
}

impl std::str::FromStr for EmailStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EmailStatus::Pending),
            "active" => Ok(EmailStatus::Active),
            "disabled" => Ok(EmailStatus::Disabled),
            other => Err(format!("Unknown email status: {}", other)),
        }
    }
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email address registered by a user, together with the state of its
/// verification code lifecycle.
///
/// Invariant: `verification_code_hash` and `verification_code_expires_at`
/// are either both present (a code is outstanding) or both absent. An
/// `Active` record always has both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Identifier of the owning account
    pub owner_id: Uuid,

    /// The email address being verified
    pub email_address: String,

    /// Current lifecycle status
    pub status: EmailStatus,

    /// SHA-256 hex digest of the outstanding verification code, if any.
    /// The plaintext code is never stored.
    pub verification_code_hash: Option<String>,

    /// Absolute expiry instant of the outstanding code, if any
    pub verification_code_expires_at: Option<DateTime<Utc>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl EmailRecord {
    /// Creates a new pending email record with no code issued yet
    pub fn new(owner_id: Uuid, email_address: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            email_address,
            status: EmailStatus::Pending,
            verification_code_hash: None,
            verification_code_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a verification code is currently outstanding
    pub fn has_code(&self) -> bool {
        self.verification_code_hash.is_some()
    }

    /// Whether the outstanding code has expired at `now`.
    ///
    /// Expiry is inclusive: a code submitted exactly at its expiry instant
    /// is already dead. Returns `false` when no code is outstanding.
    pub fn code_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.verification_code_expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }

    /// Attach a freshly issued code hash, overwriting any previous one.
    ///
    /// Overwrite semantics: issuing a new code silently invalidates the
    /// old one. Only pending records can carry a code.
    pub fn attach_code(
        &mut self,
        code_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.status != EmailStatus::Pending {
            return Err(DomainError::AlreadyFinalized);
        }
        self.verification_code_hash = Some(code_hash);
        self.verification_code_expires_at = Some(expires_at);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Consume the outstanding code and mark the record verified
    pub fn finalize_verification(&mut self) -> Result<(), DomainError> {
        if self.status != EmailStatus::Pending {
            return Err(DomainError::AlreadyFinalized);
        }
        self.status = EmailStatus::Active;
        self.verification_code_hash = None;
        self.verification_code_expires_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// The status this record would toggle to, or an error for records
    /// that have not finished verification.
    ///
    /// Toggling is orthogonal to verification and leaves the code fields
    /// untouched; a `Pending` record is rejected, never silently ignored.
    pub fn toggled_status(&self) -> Result<EmailStatus, DomainError> {
        match self.status {
            EmailStatus::Active => Ok(EmailStatus::Disabled),
            EmailStatus::Disabled => Ok(EmailStatus::Active),
            EmailStatus::Pending => Err(DomainError::InvalidTransition {
                from: self.status.to_string(),
            }),
        }
    }
}
