//! Handler for POST /api/v1/devices/{id}/status

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::device_dto::DeviceResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Toggle a device between active and disabled
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
        .devices
        .toggle_status(ctx.account_id, path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(DeviceResponse::from(record))),
        Err(error) => domain_error_response(&error),
    }
}
