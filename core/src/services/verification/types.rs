//! Types for verification service results

use chrono::{DateTime, Utc};

use crate::domain::entities::email::EmailRecord;

/// Result of issuing a verification code.
///
/// Deliberately omits the plaintext code: it went to the notification
/// sender and nowhere else.
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// The email record the code was issued for, with hash and expiry set
    pub record: EmailRecord,

    /// Message ID reported by the mail provider
    pub message_id: String,

    /// Absolute instant the issued code expires
    pub expires_at: DateTime<Utc>,
}
