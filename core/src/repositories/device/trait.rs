//! Device repository trait defining the interface for device record
//! persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::device::{DeviceRecord, DeviceStatus};
use crate::errors::DomainError;

/// Repository trait for device record persistence operations
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Find a device record by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DeviceRecord>, DomainError>;

    /// List all device records belonging to an account
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<DeviceRecord>, DomainError>;

    /// Persist a new device record
    async fn insert(&self, record: DeviceRecord) -> Result<DeviceRecord, DomainError>;

    /// Conditionally swap the status of a record
    ///
    /// # Returns
    /// * `Ok(true)` - The record had status `from` and now has status `to`
    /// * `Ok(false)` - The record was not in status `from` (lost race)
    async fn set_status(
        &self,
        id: Uuid,
        from: DeviceStatus,
        to: DeviceStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
