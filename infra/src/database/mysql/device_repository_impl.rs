//! MySQL implementation of the DeviceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use ds_core::domain::entities::device::{DeviceRecord, DeviceStatus};
use ds_core::errors::DomainError;
use ds_core::repositories::DeviceRepository;

/// MySQL implementation of DeviceRepository
pub struct MySqlDeviceRepository {
    pool: MySqlPool,
}

impl MySqlDeviceRepository {
    /// Create a new MySQL device repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row into a DeviceRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<DeviceRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::store(format!("Failed to get owner_id: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::store(format!("Failed to get status: {}", e)))?;

        Ok(DeviceRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::store(format!("Invalid record UUID: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::store(format!("Invalid owner UUID: {}", e)))?,
            advertising_id: row
                .try_get("advertising_id")
                .map_err(|e| DomainError::store(format!("Failed to get advertising_id: {}", e)))?,
            status: DeviceStatus::from_str(&status)
                .map_err(|e| DomainError::store(format!("Invalid status value: {}", e)))?,
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
impl DeviceRepository for MySqlDeviceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DeviceRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, advertising_id, status, created_at, updated_at
            FROM devices
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to find device record: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<DeviceRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, advertising_id, status, created_at, updated_at
            FROM devices
            WHERE owner_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to list device records: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::row_to_record(&row)?);
        }

        Ok(records)
    }

    async fn insert(&self, record: DeviceRecord) -> Result<DeviceRecord, DomainError> {
        let exists_query = r#"
            SELECT EXISTS(
                SELECT 1 FROM devices WHERE owner_id = ? AND advertising_id = ?
            ) AS already_registered
        "#;
        let exists_row = sqlx::query(exists_query)
            .bind(record.owner_id.to_string())
            .bind(&record.advertising_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to check for duplicate: {}", e)))?;
        let already_registered: i8 = exists_row
            .try_get("already_registered")
            .map_err(|e| DomainError::store(format!("Failed to read duplicate check: {}", e)))?;
        if already_registered == 1 {
            return Err(DomainError::validation(
                "Device already registered for this account",
            ));
        }

        let query = r#"
            INSERT INTO devices (
                id, owner_id, advertising_id, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.owner_id.to_string())
            .bind(&record.advertising_id)
            .bind(record.status.as_str())
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to insert device record: {}", e)))?;

        Ok(record)
    }

    async fn set_status(
        &self,
        id: Uuid,
        from: DeviceStatus,
        to: DeviceStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE devices
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
