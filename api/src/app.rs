//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware. The
//! factory is generic over the service ports so tests can drop in mock
//! implementations.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::config::auth::JwtConfig;
use ds_shared::config::server::CorsConfig;
use ds_shared::types::response::ErrorResponse;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, devices, emails, AppState};

/// Create and configure the application with all dependencies.
///
/// Auth routes are public; the email and device scopes require a valid
/// directory-issued bearer token.
pub fn create_app<E, D, M, A>(
    app_state: web::Data<AppState<E, D, M, A>>,
    jwt_config: &JwtConfig,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: EmailRepository + 'static,
    D: DeviceRepository + 'static,
    M: Mailer + 'static,
    A: AccountDirectory + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors(cors_config))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<E, D, M, A>))
                        .route("/login", web::post().to(auth::login::<E, D, M, A>))
                        .route(
                            "/forgot-password",
                            web::post().to(auth::forgot_password::<E, D, M, A>),
                        ),
                )
                .service(
                    web::scope("/emails")
                        .wrap(JwtAuth::new(jwt_config))
                        .route("", web::get().to(emails::list_emails::<E, D, M, A>))
                        .route("", web::post().to(emails::register_email::<E, D, M, A>))
                        .route("/{id}", web::get().to(emails::get_email::<E, D, M, A>))
                        .route(
                            "/{id}/resend",
                            web::post().to(emails::resend_code::<E, D, M, A>),
                        )
                        .route(
                            "/{id}/verify",
                            web::post().to(emails::verify_code::<E, D, M, A>),
                        )
                        .route(
                            "/{id}/status",
                            web::post().to(emails::toggle_status::<E, D, M, A>),
                        ),
                )
                .service(
                    web::scope("/devices")
                        .wrap(JwtAuth::new(jwt_config))
                        .route("", web::get().to(devices::list_devices::<E, D, M, A>))
                        .route("", web::post().to(devices::register_device::<E, D, M, A>))
                        .route(
                            "/{id}/status",
                            web::post().to(devices::toggle_status::<E, D, M, A>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "datashield-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
