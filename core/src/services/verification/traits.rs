//! Trait for notification sender integration

use async_trait::async_trait;

/// Trait for the out-of-band delivery of verification codes.
///
/// The plaintext code crosses this boundary exactly once, on its way to
/// the recipient; implementations must not log or persist it.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a verification code to an email address.
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider accepted the message
    /// * `Err(reason)` - Provider reported non-success; the caller treats
    ///   this as a dispatch failure and persists nothing
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String>;
}
