//! Device record entity.
//!
//! Devices are identified by their advertising ID and have no
//! verification lifecycle; they are registered active and can only be
//! toggled between active and disabled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a registered device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Active,
    Disabled,
}

impl DeviceStatus {
    /// Database string form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "active",
            DeviceStatus::Disabled => "disabled",
        }
    }

    /// The opposite status
    pub fn toggled(&self) -> DeviceStatus {
        match self {
            DeviceStatus::Active => DeviceStatus::Disabled,
            DeviceStatus::Disabled => DeviceStatus::Active,
        }
    }
}

impl std::str::FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DeviceStatus::Active),
            "disabled" => Ok(DeviceStatus::Disabled),
            other => Err(format!("Unknown device status: {}", other)),
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device identifier registered by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Identifier of the owning account
    pub owner_id: Uuid,

    /// Platform advertising identifier of the device
    pub advertising_id: String,

    /// Current status
    pub status: DeviceStatus,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl DeviceRecord {
    /// Creates a new active device record
    pub fn new(owner_id: Uuid, advertising_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            advertising_id,
            status: DeviceStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_device_is_active() {
        let device = DeviceRecord::new(Uuid::new_v4(), "ad-id-123".to_string());
        assert_eq!(device.status, DeviceStatus::Active);
        assert_eq!(device.advertising_id, "ad-id-123");
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(DeviceStatus::Active.toggled(), DeviceStatus::Disabled);
        assert_eq!(DeviceStatus::Disabled.toggled(), DeviceStatus::Active);
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [DeviceStatus::Active, DeviceStatus::Disabled] {
            assert_eq!(status.as_str().parse::<DeviceStatus>(), Ok(status));
        }
    }
}
