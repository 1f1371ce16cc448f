//! Repository interfaces for record store access
//!
//! The record store itself is an external collaborator; these traits are
//! the only way domain services touch it. Conditional mutations return
//! whether the precondition still held, which is how lost races are
//! detected.

pub mod device;
pub mod email;

pub use device::{DeviceRepository, MockDeviceRepository};
pub use email::{EmailRepository, MockEmailRepository};
