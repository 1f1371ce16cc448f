//! Email record routes: registration, code re-issue, verification, and
//! the active/disabled toggle

pub mod list;
pub mod register;
pub mod resend;
pub mod status;
pub mod verify;

pub use list::{get_email, list_emails};
pub use register::register_email;
pub use resend::resend_code;
pub use status::toggle_status;
pub use verify::verify_code;
