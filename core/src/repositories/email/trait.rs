//! Email repository trait defining the interface for email record
//! persistence.
//!
//! All mutations that participate in the verification lifecycle are
//! conditional writes: they only apply if the row still matches an
//! expected prior state, and report via their boolean return whether the
//! write landed. A `false` means a concurrent request won the race.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::email::{EmailRecord, EmailStatus};
use crate::errors::DomainError;

/// Repository trait for email record persistence operations
#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// Find an email record by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(EmailRecord))` - Record found
    /// * `Ok(None)` - No record with the given id
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmailRecord>, DomainError>;

    /// List all email records belonging to an account
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<EmailRecord>, DomainError>;

    /// Persist a new email record
    ///
    /// Fails with a validation error if the owner already registered the
    /// same address.
    async fn insert(&self, record: EmailRecord) -> Result<EmailRecord, DomainError>;

    /// Attach a code hash and expiry to a record, conditional on the
    /// record still being pending.
    ///
    /// Overwrites any previously stored hash and expiry in the same
    /// write, which is what invalidates the old code on re-issuance.
    ///
    /// # Returns
    /// * `Ok(true)` - The code was stored
    /// * `Ok(false)` - The record is no longer pending (lost race)
    async fn store_code(
        &self,
        id: Uuid,
        code_hash: &str,
        expires_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Precondition-checked completion of a verification attempt.
    ///
    /// Atomically sets the status to active and clears both code fields,
    /// but only if the record is still pending AND still carries
    /// `expected_hash`. The affected-row count distinguishes success from
    /// a lost race; two concurrent attempts can never both observe
    /// `Ok(true)`.
    async fn complete_verification(
        &self,
        id: Uuid,
        expected_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Conditionally swap the status of a record, leaving the code fields
    /// untouched.
    ///
    /// # Returns
    /// * `Ok(true)` - The record had status `from` and now has status `to`
    /// * `Ok(false)` - The record was not in status `from`
    async fn set_status(
        &self,
        id: Uuid,
        from: EmailStatus,
        to: EmailStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
