//! Mock implementation of DeviceRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::device::{DeviceRecord, DeviceStatus};
use crate::errors::DomainError;

use super::trait_::DeviceRepository;

/// In-memory device repository for tests and development wiring
#[derive(Clone)]
pub struct MockDeviceRepository {
    records: Arc<RwLock<HashMap<Uuid, DeviceRecord>>>,
}

impl MockDeviceRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceRepository for MockDeviceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DeviceRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<DeviceRecord>, DomainError> {
        let records = self.records.read().await;
        let mut owned: Vec<DeviceRecord> = records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at);
        Ok(owned)
    }

    async fn insert(&self, record: DeviceRecord) -> Result<DeviceRecord, DomainError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|r| r.owner_id == record.owner_id && r.advertising_id == record.advertising_id)
        {
            return Err(DomainError::validation("Device already registered"));
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn set_status(
        &self,
        id: Uuid,
        from: DeviceStatus,
        to: DeviceStatus,
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
