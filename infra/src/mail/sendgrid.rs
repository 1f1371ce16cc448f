//! SendGrid mail dispatch implementation.
//!
//! Posts to the v3 `/mail/send` endpoint. Any outcome other than a 2xx
//! response is reported as non-success to the caller, which treats it as
//! a dispatch failure and persists nothing.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use ds_core::services::verification::Mailer;
use ds_shared::config::mail::MailConfig;

use crate::InfrastructureError;

const VERIFICATION_SUBJECT: &str = "Your verification code";

#[derive(Serialize)]
struct MailAddress<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<MailAddress<'a>>,
}

#[derive(Serialize)]
struct MailContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: MailAddress<'a>,
    subject: &'a str,
    content: Vec<MailContent<'a>>,
}

/// Mailer backed by the SendGrid v3 HTTP API
pub struct SendGridMailer {
    client: reqwest::Client,
    api_base_url: String,
    api_key: String,
    from_address: String,
    code_ttl_minutes: i64,
}

impl SendGridMailer {
    /// Create a new SendGrid mailer from configuration.
    ///
    /// `code_ttl_minutes` is the issuance expiry window, quoted verbatim
    /// in the message body so recipients know how long the code lives.
    /// Fails when no API key is configured; deployments without one
    /// should use [`crate::mail::LoggingMailer`] instead.
    pub fn new(config: &MailConfig, code_ttl_minutes: i64) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| InfrastructureError::Config("MAIL_API_KEY not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address: config.from_address.clone(),
            code_ttl_minutes,
        })
    }
}

fn verification_body(code: &str, ttl_minutes: i64) -> String {
    format!(
        "Your verification code is {}. This code will expire in {} minutes.",
        code, ttl_minutes
    )
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        let body = SendRequest {
            personalizations: vec![Personalization {
                to: vec![MailAddress { email: to }],
            }],
            from: MailAddress {
                email: &self.from_address,
            },
            subject: VERIFICATION_SUBJECT,
            content: vec![MailContent {
                content_type: "text/plain",
                value: verification_body(code, self.code_ttl_minutes),
            }],
        };

        let url = format!("{}/mail/send", self.api_base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                event = "mail_dispatch_rejected",
                "Mail provider rejected dispatch"
            );
            return Err(format!("provider returned {}: {}", status, detail));
        }

        // SendGrid reports the message id in a response header
        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        tracing::info!(
            message_id = %message_id,
            event = "mail_dispatched",
            "Verification code dispatched"
        );

        Ok(message_id)
    }
}
