//! Device registry service

mod service;

pub use service::DeviceService;
