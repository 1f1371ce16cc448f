//! Translation of domain errors into HTTP responses.
//!
//! Status mapping:
//! - `NotFound` -> 404 (unknown and foreign-owned records look identical)
//! - rejected transitions and lost races -> 409
//! - bad input, wrong or expired codes -> 400
//! - credential rejections -> 401 / 403
//! - collaborator failures -> 502 / 503

use actix_web::HttpResponse;
use validator::ValidationErrors;

use ds_core::errors::DomainError;
use ds_shared::types::response::ErrorResponse;

/// Build the HTTP response for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let body = ErrorResponse::new(error.code(), error.to_string())
        .with_detail("retryable", serde_json::json!(error.is_retryable()));

    match error {
        DomainError::NotFound => HttpResponse::NotFound().json(body),

        DomainError::AlreadyFinalized
        | DomainError::InvalidTransition { .. }
        | DomainError::PreconditionFailed
        | DomainError::AccountAlreadyExists => HttpResponse::Conflict().json(body),

        DomainError::Expired | DomainError::InvalidCode | DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(body)
        }

        DomainError::AuthenticationFailed => HttpResponse::Unauthorized().json(body),
        DomainError::VerificationRequired => HttpResponse::Forbidden().json(body),

        DomainError::DispatchFailed { .. } | DomainError::DirectoryUnavailable { .. } => {
            HttpResponse::BadGateway().json(body)
        }
        DomainError::StoreUnavailable { .. } => HttpResponse::ServiceUnavailable().json(body),
    }
}

/// Build a 400 response from request body validation failures
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new("validation_error", "Request validation failed");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.with_detail(field, serde_json::json!(messages));
    }
    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_rejections_map_to_conflict() {
        for error in [
            DomainError::AlreadyFinalized,
            DomainError::PreconditionFailed,
            DomainError::InvalidTransition {
                from: "pending".to_string(),
            },
        ] {
            let response = domain_error_response(&error);
            assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_code_rejections_map_to_bad_request() {
        for error in [DomainError::InvalidCode, DomainError::Expired] {
            let response = domain_error_response(&error);
            assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_collaborator_failures_are_gateway_errors() {
        let dispatch = domain_error_response(&DomainError::DispatchFailed {
            reason: "timeout".to_string(),
        });
        assert_eq!(dispatch.status(), actix_web::http::StatusCode::BAD_GATEWAY);

        let store = domain_error_response(&DomainError::store("pool exhausted"));
        assert_eq!(
            store.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_verification_required_maps_to_forbidden() {
        let response = domain_error_response(&DomainError::VerificationRequired);
        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }
}
