//! Tests for the JWT middleware guarding the record routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use uuid::Uuid;

use common::{bearer_token, cors_config, jwt_config, test_state, StubDirectory};
use ds_api::app::create_app;

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::get().uri("/api/v1/emails").to_request();
    let resp = test::try_call_service(&app, req).await;
    assert!(resp.is_err());
}

#[actix_web::test]
async fn test_garbage_token_is_unauthorized() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/emails")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert!(resp.is_err());
}

#[actix_web::test]
async fn test_valid_token_reaches_handler() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let token = bearer_token(Uuid::new_v4());
    let req = test::TestRequest::get()
        .uri("/api/v1/emails")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[actix_web::test]
async fn test_health_endpoint_is_public() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
