//! Handler for POST /api/v1/emails

use actix_web::{web, HttpResponse};
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::email_dto::{IssueCodeResponse, RegisterEmailRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Register a new email address and dispatch its first verification
/// code.
///
/// When dispatch fails the record exists without a code; the client
/// retries through the resend endpoint.
pub async fn register_email<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
    request: web::Json<RegisterEmailRequest>,
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

    match state
        .verification
        .register_email(ctx.account_id, &request.email)
        .await
    {
        Ok(issued) => {
            HttpResponse::Created().json(ApiResponse::success(IssueCodeResponse::from(issued)))
        }
        Err(error) => domain_error_response(&error),
    }
}
