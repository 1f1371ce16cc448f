//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;
use ds_shared::utils::validation::normalize_email;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Exchange credentials for session tokens.
///
/// A login against an account whose primary email is still pending
/// comes back as 403 with the `verification_required` code.
pub async fn login<E, D, M, A>(
    state: web::Data<AppState<E, D, M, A>>,
    request: web::Json<LoginRequest>,
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
    match state.directory.login(&email, &request.password).await {
        Ok(tokens) => HttpResponse::Ok().json(ApiResponse::success(LoginResponse::from(tokens))),
        Err(error) => {
            tracing::warn!(
                error = %error,
                event = "login_rejected",
                "Login rejected"
            );
            domain_error_response(&error)
        }
    }
}
