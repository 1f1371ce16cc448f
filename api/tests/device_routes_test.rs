//! Tests for the device registry routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use uuid::Uuid;

use common::{bearer_token, cors_config, jwt_config, test_state, StubDirectory};
use ds_api::app::create_app;

#[actix_web::test]
async fn test_register_list_and_toggle_device() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;
    let token = bearer_token(Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/v1/devices")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"advertising_id": "ad-id-1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "active");
    let device_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/devices")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/devices/{}/status", device_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "disabled");
}

#[actix_web::test]
async fn test_register_device_with_empty_id_rejected() {
    let (state, _) = test_state(StubDirectory::new());
    let app = test::init_service(create_app(state, &jwt_config(), &cors_config())).await;
    let token = bearer_token(Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/v1/devices")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"advertising_id": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
