//! Authentication routes backed by the external account directory

pub mod forgot_password;
pub mod login;
pub mod register;

pub use forgot_password::forgot_password;
pub use login::login;
pub use register::register;
