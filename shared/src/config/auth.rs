//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for validating session tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_token_expiry: 1800, // 30 minutes
            issuer: String::from("datashield"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

/// Authentication configuration: JWT validation plus the external account
/// directory service that owns credentials and session issuance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Base URL of the account directory API (login/register/reset)
    pub directory_base_url: String,

    /// HTTP request timeout in seconds for directory calls
    #[serde(default = "default_directory_timeout")]
    pub directory_timeout: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            directory_base_url: String::from("http://localhost:8000"),
            directory_timeout: default_directory_timeout(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .unwrap_or(1800);
        let directory_base_url = std::env::var("DIRECTORY_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry,
                ..Default::default()
            },
            directory_base_url,
            ..Default::default()
        }
    }
}

fn default_directory_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_detection() {
        assert!(JwtConfig::default().is_using_default_secret());
        assert!(!JwtConfig::new("s3cret").is_using_default_secret());
    }
}
