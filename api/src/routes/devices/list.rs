//! Handler for GET /api/v1/devices

use actix_web::{web, HttpResponse};

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::device_dto::DeviceResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// List all devices of the authenticated account
pub async fn list_devices<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
) -> HttpResponse
where
    E: EmailRepository + 'static,
    D: DeviceRepository + 'static,
    M: Mailer + 'static,
    A: AccountDirectory + 'static,
{
    match state.devices.list_devices(ctx.account_id).await {
        Ok(records) => {
            let response: Vec<DeviceResponse> =
                records.into_iter().map(DeviceResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(response))
        }
        Err(error) => domain_error_response(&error),
    }
}
