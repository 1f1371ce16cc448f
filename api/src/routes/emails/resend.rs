//! Handler for POST /api/v1/emails/{id}/resend

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::email_dto::IssueCodeResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Issue a fresh verification code for a pending record.
///
/// The new code replaces the outstanding one; any previously dispatched
/// code stops working the moment this call succeeds.
pub async fn resend_code<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    E: EmailRepository + 'static,
    D: DeviceRepository + 'static,
    M: Mailer + 'static,
    A: AccountDirectory + 'static,
{
    match state
        .verification
        .issue_code(ctx.account_id, path.into_inner())
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(ApiResponse::success(IssueCodeResponse::from(issued))),
        Err(error) => domain_error_response(&error),
    }
}
