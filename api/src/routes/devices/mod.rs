//! Device registry routes

pub mod list;
pub mod register;
pub mod status;

pub use list::list_devices;
pub use register::register_device;
pub use status::toggle_status;
