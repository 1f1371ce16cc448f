//! Business services

pub mod auth;
pub mod devices;
pub mod verification;

pub use auth::AccountDirectory;
pub use devices::DeviceService;
pub use verification::{
    CodeAlphabet, CodeGenerator, IssueCodeResult, Mailer, VerificationConfig, VerificationService,
};
