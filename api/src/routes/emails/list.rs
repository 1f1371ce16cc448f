//! Handlers for GET /api/v1/emails and GET /api/v1/emails/{id}

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

/// List all email records of the authenticated account
pub async fn list_emails<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
) -> HttpResponse
where
    E: EmailRepository + 'static,
    D: DeviceRepository + 'static,
    M: Mailer + 'static,
    A: AccountDirectory + 'static,
{
    match state.verification.list_emails(ctx.account_id).await {
        Ok(records) => {
            let response: Vec<EmailResponse> =
                records.into_iter().map(EmailResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(response))
        }
        Err(error) => domain_error_response(&error),
    }
}

/// Fetch a single email record owned by the authenticated account
pub async fn get_email<E, D, M, A>(
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
        .get_owned_record(ctx.account_id, path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(EmailResponse::from(record))),
        Err(error) => domain_error_response(&error),
    }
}
