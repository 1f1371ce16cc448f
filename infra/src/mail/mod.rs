//! Mail dispatch module
//!
//! Implements the `Mailer` port: the SendGrid-compatible HTTP sender for
//! production and a logging stand-in for development environments where
//! no mail credentials are configured.

pub mod mock;
pub mod sendgrid;

pub use mock::LoggingMailer;
pub use sendgrid::SendGridMailer;
