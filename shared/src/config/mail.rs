//! Outbound mail dispatch configuration

use serde::{Deserialize, Serialize};

/// Configuration for the mail provider used to deliver verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Base URL of the mail provider's send API
    pub api_base_url: String,

    /// Provider API key; absent in development where the mock mailer is used
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address shown to recipients
    pub from_address: String,

    /// HTTP request timeout in seconds for dispatch calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Use the mock mailer instead of the real provider
    #[serde(default)]
    pub use_mock: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://api.sendgrid.com/v3"),
            api_key: None,
            from_address: String::from("no-reply@datashield.dev"),
            request_timeout: default_request_timeout(),
            use_mock: false,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("MAIL_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.sendgrid.com/v3".to_string());
        let api_key = std::env::var("MAIL_API_KEY").ok();
        let from_address = std::env::var("MAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "no-reply@datashield.dev".to_string());
        let use_mock = std::env::var("MAIL_USE_MOCK")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            api_base_url,
            api_key,
            from_address,
            use_mock,
            ..Default::default()
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}
