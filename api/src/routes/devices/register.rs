//! Handler for POST /api/v1/devices

use actix_web::{web, HttpResponse};
use validator::Validate;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::verification::Mailer;
use ds_shared::types::response::ApiResponse;

use crate::dto::device_dto::{DeviceResponse, RegisterDeviceRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Register a device by its advertising identifier.
///
/// Devices have no verification step; they are registered active.
pub async fn register_device<E, D, M, A>(
    ctx: AuthContext,
    state: web::Data<AppState<E, D, M, A>>,
    request: web::Json<RegisterDeviceRequest>,
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
        .devices
        .register_device(ctx.account_id, &request.advertising_id)
        .await
    {
        Ok(record) => {
            HttpResponse::Created().json(ApiResponse::success(DeviceResponse::from(record)))
        }
        Err(error) => domain_error_response(&error),
    }
}
