//! Handler for POST /api/v1/auth/forgot-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;
use ds_shared::utils::validation::normalize_email;

use crate::dto::auth_dto::ForgotPasswordRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Start a password reset through the account directory
pub async fn forgot_password<E, D, M, A>(
    state: web::Data<AppState<E, D, M, A>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    E: EmailRepository + 'static,
    D: DeviceRepository + 'static,
    M: Mailer + 'static,
    A: AccountDirectory + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let email = normalize_email(&request.email);
    match state.directory.forgot_password(&email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
            "message": "If the account exists, a reset email has been sent."
        }))),
        Err(error) => domain_error_response(&error),
    }
}
