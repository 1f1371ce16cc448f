//! HTTP client for the external account directory.
//!
//! Credentials never touch this service's own store; they are forwarded
//! to the directory and its status codes are translated into domain
//! errors. Transport failures and 5xx responses are retryable from the
//! caller's point of view.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

use ds_core::domain::value_objects::session::SessionTokens;
use ds_core::errors::{DomainError, DomainResult};
use ds_core::services::auth::AccountDirectory;
use ds_shared::config::auth::AuthConfig;

use crate::InfrastructureError;

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

/// Account directory client speaking JSON over HTTP
pub struct HttpAccountDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountDirectory {
    /// Create a new directory client from configuration
    pub fn new(config: &AuthConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.directory_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.directory_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn unavailable(reason: impl std::fmt::Display) -> DomainError {
        DomainError::DirectoryUnavailable {
            reason: reason.to_string(),
        }
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> DomainResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(Self::unavailable)
    }

    /// Map a non-success directory status to the matching domain error
    fn map_rejection(status: StatusCode) -> DomainError {
        match status {
            StatusCode::UNAUTHORIZED => DomainError::AuthenticationFailed,
            StatusCode::FORBIDDEN => DomainError::VerificationRequired,
            StatusCode::CONFLICT => DomainError::AccountAlreadyExists,
            StatusCode::NOT_FOUND => DomainError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                DomainError::validation("Directory rejected the request")
            }
            other => Self::unavailable(format!("directory returned {}", other)),
        }
    }
}

#[async_trait]
impl AccountDirectory for HttpAccountDirectory {
    async fn register(&self, email: &str, password: &str) -> DomainResult<()> {
        let response = self
            .post_json("/register", &CredentialsBody { email, password })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_rejection(status));
        }

        tracing::info!(event = "directory_account_created", "Account registered");
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> DomainResult<SessionTokens> {
        let response = self
            .post_json("/login", &CredentialsBody { email, password })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_rejection(status));
        }

        let tokens: SessionTokens = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("malformed token response: {}", e)))?;

        Ok(tokens)
    }

    async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let response = self
            .post_json("/forgot-password", &EmailBody { email })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_rejection(status));
        }

        Ok(())
    }
}
