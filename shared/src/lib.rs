//! Shared utilities and common types for the DataShield server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, ServerConfig,
};
pub use types::response::{ApiResponse, ErrorResponse};
pub use utils::validation;
