//! Device record request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ds_core::domain::entities::device::{DeviceRecord, DeviceStatus};

/// Request body for POST /api/v1/devices
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterDeviceRequest {
    #[validate(length(min = 1, max = 64, message = "Advertising ID must be 1-64 characters"))]
    pub advertising_id: String,
}

/// Public view of a device record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    pub id: Uuid,
    pub advertising_id: String,
    pub status: DeviceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DeviceRecord> for DeviceResponse {
    fn from(record: DeviceRecord) -> Self {
        Self {
            id: record.id,
            advertising_id: record.advertising_id,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_device_request_validation() {
        let valid = RegisterDeviceRequest {
            advertising_id: "ad-id-1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = RegisterDeviceRequest {
            advertising_id: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
