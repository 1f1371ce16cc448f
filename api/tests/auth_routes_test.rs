//! Tests for the directory-backed authentication routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;

use common::{cors_config, jwt_config, test_state, LoginBehavior, StubDirectory};
use ds_api::app::create_app;

#[actix_web::test]
async fn test_register_returns_created() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2hunter2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_login_success_returns_tokens() {
    let (state, _) = test_state(StubDirectory::with_login(LoginBehavior::Success));
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2hunter2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(body["data"]["access_token"].as_str().is_some());
}

#[actix_web::test]
async fn test_login_against_unverified_email_is_forbidden() {
    let (state, _) = test_state(StubDirectory::with_login(LoginBehavior::VerificationRequired));
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2hunter2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_required");
}

#[actix_web::test]
async fn test_login_with_bad_credentials_is_unauthorized() {
    let (state, _) = test_state(StubDirectory::with_login(LoginBehavior::BadCredentials));
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "wrong-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_forgot_password_does_not_reveal_account_existence() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/forgot-password")
        .set_json(serde_json::json!({"email": "whoever@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
