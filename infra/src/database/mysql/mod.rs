//! MySQL repository implementations

pub mod device_repository_impl;
pub mod email_repository_impl;

pub use device_repository_impl::MySqlDeviceRepository;
pub use email_repository_impl::MySqlEmailRepository;
