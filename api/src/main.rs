//! DataShield API server entry point.
//!
//! Wires the MySQL repositories, the mail sender, and the account
//! directory client into the application factory and starts the HTTP
//! server.

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use ds_core::services::devices::DeviceService;
use ds_core::services::verification::{Mailer, VerificationConfig, VerificationService};
use ds_infra::database::{create_pool, MySqlDeviceRepository, MySqlEmailRepository};
use ds_infra::directory::HttpAccountDirectory;
use ds_infra::mail::{LoggingMailer, SendGridMailer};
use ds_shared::config::AppConfig;

use ds_api::app::create_app;
use ds_api::routes::AppState;

/// Runtime-selected mail sender.
///
/// The logging variant is used when `MAIL_USE_MOCK` is set or no API key
/// is configured.
enum AppMailer {
    SendGrid(SendGridMailer),
    Logging(LoggingMailer),
}

#[async_trait]
impl Mailer for AppMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        match self {
            AppMailer::SendGrid(mailer) => mailer.send_verification_code(to, code).await,
            AppMailer::Logging(mailer) => mailer.send_verification_code(to, code).await,
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    tracing::info!(
        environment = %config.environment,
        event = "server_starting",
        "Starting DataShield API server"
    );

    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "JWT_SECRET must be set in production",
        ));
    }

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let verification_config = VerificationConfig::default();

    let mailer = if config.mail.use_mock || config.mail.api_key.is_none() {
        tracing::warn!(
            event = "mock_mailer_selected",
            "No mail provider configured, codes will be written to the log"
        );
        AppMailer::Logging(LoggingMailer::new())
    } else {
        let sendgrid =
            SendGridMailer::new(&config.mail, verification_config.code_expiration_minutes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        AppMailer::SendGrid(sendgrid)
    };

    let directory = HttpAccountDirectory::new(&config.auth)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let email_repository = Arc::new(MySqlEmailRepository::new(pool.clone()));
    let device_repository = Arc::new(MySqlDeviceRepository::new(pool));

    let app_state = web::Data::new(AppState {
        verification: Arc::new(VerificationService::new(
            email_repository,
            Arc::new(mailer),
            verification_config,
        )),
        devices: Arc::new(DeviceService::new(device_repository)),
        directory: Arc::new(directory),
    });

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let jwt_config = config.auth.jwt.clone();
    let cors_config = config.cors.clone();

    tracing::info!(
        address = %bind_address,
        event = "server_listening",
        "Server binding"
    );

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &jwt_config, &cors_config)
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
