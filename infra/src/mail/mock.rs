//! Logging mailer for development environments.

use async_trait::async_trait;
use uuid::Uuid;

use ds_core::services::verification::Mailer;

/// Mailer that writes the code to the log instead of dispatching it.
///
/// Only suitable for development; the plaintext code appears in the log
/// output.
#[derive(Debug, Default)]
pub struct LoggingMailer;

impl LoggingMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        let message_id = Uuid::new_v4().to_string();
        tracing::info!(
            recipient = %to,
            code = %code,
            message_id = %message_id,
            event = "mail_logged",
            "Verification code logged instead of dispatched"
        );
        Ok(message_id)
    }
}
