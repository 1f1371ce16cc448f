//! Mock implementation of EmailRepository for testing
//!
//! The conditional writes take the map's write lock for their whole
//! read-check-write sequence, giving the same per-record serializability
//! the SQL implementation gets from conditional UPDATEs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::email::{EmailRecord, EmailStatus};
use crate::errors::DomainError;

use super::trait_::EmailRepository;

/// In-memory email repository for tests and development wiring
#[derive(Clone)]
pub struct MockEmailRepository {
    records: Arc<RwLock<HashMap<Uuid, EmailRecord>>>,
}

impl MockEmailRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a record (test setup helper)
    pub async fn seed(&self, record: EmailRecord) {
        self.records.write().await.insert(record.id, record);
    }
}

impl Default for MockEmailRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailRepository for MockEmailRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmailRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<EmailRecord>, DomainError> {
        let records = self.records.read().await;
        let mut owned: Vec<EmailRecord> = records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at);
        Ok(owned)
    }

    async fn insert(&self, record: EmailRecord) -> Result<EmailRecord, DomainError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|r| r.owner_id == record.owner_id && r.email_address == record.email_address)
        {
            return Err(DomainError::validation("Email address already registered"));
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn store_code(
        &self,
        id: Uuid,
        code_hash: &str,
        expires_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) if record.status == EmailStatus::Pending => {
                record.verification_code_hash = Some(code_hash.to_string());
                record.verification_code_expires_at = Some(expires_at);
                record.updated_at = updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn complete_verification(
        &self,
        id: Uuid,
        expected_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record)
                if record.status == EmailStatus::Pending
                    && record.verification_code_hash.as_deref() == Some(expected_hash) =>
            {
                record.status = EmailStatus::Active;
                record.verification_code_hash = None;
                record.verification_code_expires_at = None;
                record.updated_at = updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn set_status(
        &self,
        id: Uuid,
        from: EmailStatus,
        to: EmailStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) if record.status == from => {
                record.status = to;
                record.updated_at = updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
