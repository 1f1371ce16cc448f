//! Domain entities

pub mod device;
pub mod email;

pub use device::{DeviceRecord, DeviceStatus};
pub use email::{EmailRecord, EmailStatus};
