//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;
use ds_shared::utils::validation::normalize_email;

use crate::dto::auth_dto::RegisterRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Create a new account in the directory.
///
/// Registration does not log the user in; the client follows up with a
/// login call once the primary email is verified.
pub async fn register<E, D, M, A>(
    state: web::Data<AppState<E, D, M, A>>,
    request: web::Json<RegisterRequest>,
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
    match state.directory.register(&email, &request.password).await {
        Ok(()) => HttpResponse::Created().json(ApiResponse::success(serde_json::json!({
            "message": "Account created. Verify your email before logging in."
        }))),
        Err(error) => {
            tracing::warn!(
                error = %error,
                event = "registration_rejected",
                "Account registration rejected"
            );
            domain_error_response(&error)
        }
    }
}
