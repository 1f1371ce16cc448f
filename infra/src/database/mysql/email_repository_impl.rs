//! MySQL implementation of the EmailRepository trait.
//!
//! The lifecycle mutations are single conditional UPDATE statements; the
//! affected-row count is the arbiter for concurrent requests. No explicit
//! transactions or row locks are needed because every precondition is
//! folded into the WHERE clause.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use ds_core::domain::entities::email::{EmailRecord, EmailStatus};
use ds_core::errors::DomainError;
use ds_core::repositories::EmailRepository;

/// MySQL implementation of EmailRepository
pub struct MySqlEmailRepository {
    pool: MySqlPool,
}

impl MySqlEmailRepository {
    /// Create a new MySQL email repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row into an EmailRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<EmailRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::store(format!("Failed to get owner_id: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::store(format!("Failed to get status: {}", e)))?;

        Ok(EmailRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::store(format!("Invalid record UUID: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::store(format!("Invalid owner UUID: {}", e)))?,
            email_address: row
                .try_get("email_address")
                .map_err(|e| DomainError::store(format!("Failed to get email_address: {}", e)))?,
            status: EmailStatus::from_str(&status)
                .map_err(|e| DomainError::store(format!("Invalid status value: {}", e)))?,
            verification_code_hash: row.try_get("verification_code_hash").map_err(|e| {
                DomainError::store(format!("Failed to get verification_code_hash: {}", e))
            })?,
            verification_code_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verification_code_expires_at")
                .map_err(|e| {
                    DomainError::store(format!("Failed to get verification_code_expires_at: {}", e))
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::store(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::store(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl EmailRepository for MySqlEmailRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmailRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, email_address, status,
                   verification_code_hash, verification_code_expires_at,
                   created_at, updated_at
            FROM emails
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to find email record: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<EmailRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, email_address, status,
                   verification_code_hash, verification_code_expires_at,
                   created_at, updated_at
            FROM emails
            WHERE owner_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to list email records: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::row_to_record(&row)?);
        }

        Ok(records)
    }

    async fn insert(&self, record: EmailRecord) -> Result<EmailRecord, DomainError> {
        let exists_query = r#"
            SELECT EXISTS(
                SELECT 1 FROM emails WHERE owner_id = ? AND email_address = ?
            ) AS already_registered
        "#;
        let exists_row = sqlx::query(exists_query)
            .bind(record.owner_id.to_string())
            .bind(&record.email_address)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to check for duplicate: {}", e)))?;
        let already_registered: i8 = exists_row
            .try_get("already_registered")
            .map_err(|e| DomainError::store(format!("Failed to read duplicate check: {}", e)))?;
        if already_registered == 1 {
            return Err(DomainError::validation(
                "Email address already registered for this account",
            ));
        }

        let query = r#"
            INSERT INTO emails (
                id, owner_id, email_address, status,
                verification_code_hash, verification_code_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.owner_id.to_string())
            .bind(&record.email_address)
            .bind(record.status.as_str())
            .bind(&record.verification_code_hash)
            .bind(record.verification_code_expires_at)
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to insert email record: {}", e)))?;

        Ok(record)
    }

    async fn store_code(
        &self,
        id: Uuid,
        code_hash: &str,
        expires_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE emails
            SET verification_code_hash = ?,
                verification_code_expires_at = ?,
                updated_at = ?
            WHERE id = ? AND status = 'pending'
        "#;

        let result = sqlx::query(query)
            .bind(code_hash)
            .bind(expires_at)
            .bind(updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to store code: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn complete_verification(
        &self,
        id: Uuid,
        expected_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE emails
            SET status = 'active',
                verification_code_hash = NULL,
                verification_code_expires_at = NULL,
                updated_at = ?
            WHERE id = ? AND status = 'pending' AND verification_code_hash = ?
        "#;

        let result = sqlx::query(query)
            .bind(updated_at)
            .bind(id.to_string())
            .bind(expected_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to complete verification: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_status(
        &self,
        id: Uuid,
        from: EmailStatus,
        to: EmailStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE emails
            SET status = ?, updated_at = ?
            WHERE id = ? AND status = ?
        "#;

        let result = sqlx::query(query)
            .bind(to.as_str())
            .bind(updated_at)
            .bind(id.to_string())
            .bind(from.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to update status: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
