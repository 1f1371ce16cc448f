//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use ds_api::middleware::auth::Claims;
use ds_api::routes::AppState;
use ds_core::domain::value_objects::session::SessionTokens;
use ds_core::errors::{DomainError, DomainResult};
use ds_core::repositories::{MockDeviceRepository, MockEmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::devices::DeviceService;
use ds_core::services::verification::{Mailer, VerificationConfig, VerificationService};
use ds_shared::config::auth::JwtConfig;
use ds_shared::config::server::CorsConfig;

/// Mailer that records dispatched codes for later assertions
pub struct CaptureMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl CaptureMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn last_code(&self) -> String {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(_, code)| code.clone())
            .expect("no code dispatched yet")
    }
}

#[async_trait]
impl Mailer for CaptureMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((to.to_string(), code.to_string()));
        Ok(format!("msg-{}", sent.len()))
    }
}

/// Scripted login outcome for the stub directory
pub enum LoginBehavior {
    Success,
    VerificationRequired,
    BadCredentials,
}

/// Account directory stub with scripted behavior
pub struct StubDirectory {
    pub login_behavior: LoginBehavior,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self {
            login_behavior: LoginBehavior::Success,
        }
    }

    pub fn with_login(behavior: LoginBehavior) -> Self {
        Self {
            login_behavior: behavior,
        }
    }
}

#[async_trait]
impl AccountDirectory for StubDirectory {
    async fn register(&self, _email: &str, _password: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn login(&self, _email: &str, _password: &str) -> DomainResult<SessionTokens> {
        match self.login_behavior {
            LoginBehavior::Success => Ok(SessionTokens {
                access_token: "stub-token".to_string(),
                token_type: "bearer".to_string(),
                expires_in: 1800,
            }),
            LoginBehavior::VerificationRequired => Err(DomainError::VerificationRequired),
            LoginBehavior::BadCredentials => Err(DomainError::AuthenticationFailed),
        }
    }

    async fn forgot_password(&self, _email: &str) -> DomainResult<()> {
        Ok(())
    }
}

pub type TestState = AppState<MockEmailRepository, MockDeviceRepository, CaptureMailer, StubDirectory>;

/// Build application state backed by in-memory mocks
pub fn test_state(directory: StubDirectory) -> (web::Data<TestState>, Arc<CaptureMailer>) {
    test_state_with_config(directory, VerificationConfig::default())
}

pub fn test_state_with_config(
    directory: StubDirectory,
    config: VerificationConfig,
) -> (web::Data<TestState>, Arc<CaptureMailer>) {
    let mailer = Arc::new(CaptureMailer::new());
    let state = web::Data::new(AppState {
        verification: Arc::new(VerificationService::new(
            Arc::new(MockEmailRepository::new()),
            mailer.clone(),
            config,
        )),
        devices: Arc::new(DeviceService::new(Arc::new(MockDeviceRepository::new()))),
        directory: Arc::new(directory),
    });
    (state, mailer)
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::default()
}

pub fn cors_config() -> CorsConfig {
    CorsConfig::default()
}

/// Mint a bearer token the middleware will accept
pub fn bearer_token(account_id: Uuid) -> String {
    let config = jwt_config();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: account_id.to_string(),
        exp: now + 300,
        iat: now,
        iss: config.issuer.clone(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap()
}
