//! Main verification service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;

use ds_shared::utils::validation;

use crate::domain::entities::email::{EmailRecord, EmailStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::EmailRepository;

use super::config::VerificationConfig;
use super::generator::CodeGenerator;
use super::traits::Mailer;
use super::types::IssueCodeResult;

/// Orchestrates the verification code lifecycle for email records.
///
/// The service itself is stateless; all shared state lives in the record
/// store behind `EmailRepository`, and every mutating step goes through a
/// precondition-checked write so concurrent requests for the same record
/// serialize correctly.
pub struct VerificationService<R: EmailRepository, M: Mailer> {
    /// Record store access
    repository: Arc<R>,
    /// Notification sender for plaintext code delivery
    mailer: Arc<M>,
    /// Code shape and expiry configuration
    config: VerificationConfig,
    /// Code generator derived from the configuration
    generator: CodeGenerator,
}

impl<R: EmailRepository, M: Mailer> VerificationService<R, M> {
    /// Create a new verification service
    pub fn new(repository: Arc<R>, mailer: Arc<M>, config: VerificationConfig) -> Self {
        let generator = CodeGenerator::new(&config);
        Self {
            repository,
            mailer,
            config,
            generator,
        }
    }

    /// List all email records belonging to an account
    pub async fn list_emails(&self, owner_id: uuid::Uuid) -> DomainResult<Vec<EmailRecord>> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Fetch a single record, checking ownership
    pub async fn get_owned_record(
        &self,
        owner_id: uuid::Uuid,
        record_id: uuid::Uuid,
    ) -> DomainResult<EmailRecord> {
        let record = self
            .repository
            .find_by_id(record_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        // A foreign record is indistinguishable from a missing one
        if record.owner_id != owner_id {
            return Err(DomainError::NotFound);
        }
        Ok(record)
    }

    /// Register a new email address for an account and immediately issue
    /// a verification code for it.
    ///
    /// This is the single server-side entry point for the add-email flow:
    /// the record is created `pending`, the plaintext code goes to the
    /// notification sender, and only its hash is persisted.
    pub async fn register_email(
        &self,
        owner_id: uuid::Uuid,
        email_address: &str,
    ) -> DomainResult<IssueCodeResult> {
        if !validation::is_valid_email(email_address) {
            return Err(DomainError::validation(format!(
                "Invalid email address: {}",
                email_address
            )));
        }

        let address = validation::normalize_email(email_address);
        let record = self
            .repository
            .insert(EmailRecord::new(owner_id, address))
            .await?;

        tracing::info!(
            record_id = %record.id,
            owner_id = %owner_id,
            event = "email_registered",
            "Registered new email record"
        );

        self.issue_for(record).await
    }

    /// Issue (or re-issue) a verification code for an existing record.
    ///
    /// Re-issuing before expiry silently overwrites the previous hash and
    /// expiry, which invalidates the old code immediately; there is no
    /// "already pending" error.
    pub async fn issue_code(
        &self,
        owner_id: uuid::Uuid,
        record_id: uuid::Uuid,
    ) -> DomainResult<IssueCodeResult> {
        let record = self.get_owned_record(owner_id, record_id).await?;

        if record.status != EmailStatus::Pending {
            return Err(DomainError::AlreadyFinalized);
        }

        self.issue_for(record).await
    }

    /// Verify a submitted code against a record and finalize it on match.
    ///
    /// The precondition checks run in order and short-circuit; the final
    /// state transition is a single conditional write, so two attempts
    /// racing each other can never both succeed.
    pub async fn verify_code(
        &self,
        owner_id: uuid::Uuid,
        record_id: uuid::Uuid,
        submitted_code: &str,
    ) -> DomainResult<EmailRecord> {
        let mut record = self.get_owned_record(owner_id, record_id).await?;

        if record.status != EmailStatus::Pending {
            return Err(DomainError::AlreadyFinalized);
        }

        let stored_hash = match record.verification_code_hash.clone() {
            Some(hash) => hash,
            // No code outstanding: nothing a submitted code could match
            None => return Err(DomainError::InvalidCode),
        };

        let now = Utc::now();
        if record.code_expired_at(now) {
            tracing::info!(
                record_id = %record.id,
                event = "code_expired",
                "Verification attempt with expired code"
            );
            return Err(DomainError::Expired);
        }

        if !CodeGenerator::matches(&stored_hash, submitted_code) {
            tracing::warn!(
                record_id = %record.id,
                event = "code_mismatch",
                "Verification attempt with non-matching code"
            );
            return Err(DomainError::InvalidCode);
        }

        // The write only lands if the record is still pending and still
        // carries the hash we just compared against.
        let applied = self
            .repository
            .complete_verification(record.id, &stored_hash, now)
            .await?;
        if !applied {
            tracing::warn!(
                record_id = %record.id,
                event = "verification_lost_race",
                "Concurrent request finalized or re-issued first"
            );
            return Err(DomainError::PreconditionFailed);
        }

        record.status = EmailStatus::Active;
        record.verification_code_hash = None;
        record.verification_code_expires_at = None;
        record.updated_at = now;

        tracing::info!(
            record_id = %record.id,
            event = "email_verified",
            "Email ownership verified"
        );

        Ok(record)
    }

    /// Toggle a verified record between active and disabled.
    ///
    /// Rejected for pending records; verification state and code fields
    /// are never touched by the toggle.
    pub async fn toggle_status(
        &self,
        owner_id: uuid::Uuid,
        record_id: uuid::Uuid,
    ) -> DomainResult<EmailRecord> {
        let mut record = self.get_owned_record(owner_id, record_id).await?;
        let target = record.toggled_status()?;

        let now = Utc::now();
        let applied = self
            .repository
            .set_status(record.id, record.status, target, now)
            .await?;
        if !applied {
            return Err(DomainError::PreconditionFailed);
        }

        record.status = target;
        record.updated_at = now;

        tracing::info!(
            record_id = %record.id,
            status = %target,
            event = "email_status_toggled",
            "Email record status changed"
        );

        Ok(record)
    }

    /// Generate, dispatch and persist a code for a pending record.
    ///
    /// Dispatch happens before persistence: if the notification sender
    /// reports non-success nothing is stored, so a record is never left
    /// carrying a code its owner was not sent.
    async fn issue_for(&self, mut record: EmailRecord) -> DomainResult<IssueCodeResult> {
        let code = self.generator.generate();
        let code_hash = CodeGenerator::hash_code(&code);

        let message_id = self
            .mailer
            .send_verification_code(&record.email_address, &code)
            .await
            .map_err(|reason| {
                tracing::error!(
                    record_id = %record.id,
                    error = %reason,
                    event = "dispatch_failed",
                    "Mail provider rejected the verification message"
                );
                DomainError::DispatchFailed { reason }
            })?;

        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.code_expiration_minutes);

        let applied = self
            .repository
            .store_code(record.id, &code_hash, expires_at, now)
            .await?;
        if !applied {
            // The record was finalized between fetch and store
            return Err(DomainError::PreconditionFailed);
        }

        record.verification_code_hash = Some(code_hash);
        record.verification_code_expires_at = Some(expires_at);
        record.updated_at = now;

        tracing::info!(
            record_id = %record.id,
            expires_at = %expires_at,
            event = "code_issued",
            "Issued verification code"
        );

        Ok(IssueCodeResult {
            record,
            message_id,
            expires_at,
        })
    }
}
