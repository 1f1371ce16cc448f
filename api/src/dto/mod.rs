//! Request and response types for the HTTP API

pub mod auth_dto;
pub mod device_dto;
pub mod email_dto;
