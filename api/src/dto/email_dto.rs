//! Email record request and response types.
//!
//! Response types never carry the stored code hash or the plaintext
//! code; the only code-related field exposed is the expiry timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ds_core::domain::entities::email::{EmailRecord, EmailStatus};
use ds_core::services::verification::IssueCodeResult;

/// Request body for POST /api/v1/emails
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterEmailRequest {
    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 254, message = "Email address too long"))]
    pub email: String,
}

/// Request body for POST /api/v1/emails/{id}/verify
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1, max = 16, message = "Code must be 1-16 characters"))]
    pub code: String,
}

/// Public view of an email record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub id: Uuid,
    pub email: String,
    pub status: EmailStatus,
    /// Whether a verification code is currently outstanding
    pub has_pending_code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmailRecord> for EmailResponse {
    fn from(record: EmailRecord) -> Self {
        Self {
            id: record.id,
            email: record.email_address,
            status: record.status,
            has_pending_code: record.verification_code_hash.is_some(),
            code_expires_at: record.verification_code_expires_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Response body after a code has been issued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCodeResponse {
    pub record: EmailResponse,
    /// Provider-side identifier of the dispatched message
    pub message_id: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssueCodeResult> for IssueCodeResponse {
    fn from(result: IssueCodeResult) -> Self {
        Self {
            message_id: result.message_id,
            expires_at: result.expires_at,
            record: result.record.into(),
        }
    }
}
