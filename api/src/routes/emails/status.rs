//! Handler for POST /api/v1/emails/{id}/status

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::email_dto::EmailResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Toggle a verified email record between active and disabled.
///
/// Pending records are rejected with 409; they have no toggle target
/// until verification completes.
pub async fn toggle_status<E, D, M, A>(
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
        .toggle_status(ctx.account_id, path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(EmailResponse::from(record))),
        Err(error) => domain_error_response(&error),
    }
}
