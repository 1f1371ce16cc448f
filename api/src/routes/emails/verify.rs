//! Handler for POST /api/v1/emails/{id}/verify

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::email_dto::{EmailResponse, VerifyCodeRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Submit a verification code for a pending email record.
///
/// Success finalizes the record to active and consumes the code. The
/// distinct rejection codes tell the client what to do next: resend on
/// `code_expired`, retype on `invalid_code`, refresh on a 409.
pub async fn verify_code<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
    path: web::Path<Uuid>,
    request: web::Json<VerifyCodeRequest>,
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
        .verify_code(ctx.account_id, path.into_inner(), &request.code)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(EmailResponse::from(record))),
        Err(error) => domain_error_response(&error),
    }
}
