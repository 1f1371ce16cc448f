//! Route handlers grouped by API area

pub mod auth;
pub mod devices;
pub mod emails;

use std::sync::Arc;

use ds_core::repositories::{DeviceRepository, EmailRepository};
use ds_core::services::auth::AccountDirectory;
use ds_core::services::devices::DeviceService;
use ds_core::services::verification::{Mailer, VerificationService};

/// Application state that holds the shared services
pub struct AppState<E, D, M, A>
where
    E: EmailRepository,
    D: DeviceRepository,
    M: Mailer,
    A: AccountDirectory,
{
    pub verification: Arc<VerificationService<E, M>>,
    pub devices: Arc<DeviceService<D>>,
    pub directory: Arc<A>,
}
