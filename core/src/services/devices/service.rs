//! Device registry service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::device::DeviceRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::DeviceRepository;

/// Maximum accepted length for an advertising identifier
const MAX_ADVERTISING_ID_LENGTH: usize = 64;

/// Manages the per-account device registry.
///
/// Devices carry no verification lifecycle; registration and the
/// active/disabled toggle are the only operations.
pub struct DeviceService<R: DeviceRepository> {
    repository: Arc<R>,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new device service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all devices belonging to an account
    pub async fn list_devices(&self, owner_id: Uuid) -> DomainResult<Vec<DeviceRecord>> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Register a device by its advertising identifier
    pub async fn register_device(
        &self,
        owner_id: Uuid,
        advertising_id: &str,
    ) -> DomainResult<DeviceRecord> {
        let advertising_id = advertising_id.trim();
        if advertising_id.is_empty() {
            return Err(DomainError::validation("Advertising ID must not be empty"));
        }
        if advertising_id.len() > MAX_ADVERTISING_ID_LENGTH {
            return Err(DomainError::validation("Advertising ID too long"));
        }

        let record = self
            .repository
            .insert(DeviceRecord::new(owner_id, advertising_id.to_string()))
            .await?;

        tracing::info!(
            device_id = %record.id,
            owner_id = %owner_id,
            event = "device_registered",
            "Registered new device"
        );

        Ok(record)
    }

    /// Toggle a device between active and disabled
    pub async fn toggle_status(
        &self,
        owner_id: Uuid,
        device_id: Uuid,
    ) -> DomainResult<DeviceRecord> {
        let mut record = self
            .repository
            .find_by_id(device_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        if record.owner_id != owner_id {
            return Err(DomainError::NotFound);
        }

        let target = record.status.toggled();
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
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::device::DeviceStatus;
    use crate::repositories::MockDeviceRepository;

    fn service() -> DeviceService<MockDeviceRepository> {
        DeviceService::new(Arc::new(MockDeviceRepository::new()))
    }

    #[tokio::test]
    async fn test_register_and_list() {
        let service = service();
        let owner = Uuid::new_v4();

        let device = service.register_device(owner, " ad-id-1 ").await.unwrap();
        assert_eq!(device.advertising_id, "ad-id-1");
        assert_eq!(device.status, DeviceStatus::Active);

        let devices = service.list_devices(owner).await.unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_empty_id() {
        let service = service();
        let result = service.register_device(Uuid::new_v4(), "   ").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let service = service();
        let owner = Uuid::new_v4();
        let device = service.register_device(owner, "ad-id-1").await.unwrap();

        let disabled = service.toggle_status(owner, device.id).await.unwrap();
        assert_eq!(disabled.status, DeviceStatus::Disabled);

        let restored = service.toggle_status(owner, device.id).await.unwrap();
        assert_eq!(restored.status, DeviceStatus::Active);
    }

    #[tokio::test]
    async fn test_toggle_foreign_device_is_not_found() {
        let service = service();
        let device = service
            .register_device(Uuid::new_v4(), "ad-id-1")
            .await
            .unwrap();

        let result = service.toggle_status(Uuid::new_v4(), device.id).await;
        assert!(matches!(result, Err(DomainError::NotFound)));
    }
}
