//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `ds_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: verification code dispatch through a SendGrid-compatible API
//! - **Directory**: HTTP client for the external account directory

pub mod database;
pub mod directory;
pub mod mail;

pub use database::{create_pool, MySqlDeviceRepository, MySqlEmailRepository};
pub use directory::HttpAccountDirectory;
pub use mail::{LoggingMailer, SendGridMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
