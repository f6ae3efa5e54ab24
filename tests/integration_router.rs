mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{send, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_ping_answers_pong() {
    let app = setup_test_app();

    let response = app
        .router
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn test_unknown_path_is_unknown_endpoint() {
    let app = setup_test_app();

    for path in ["/nope", "/api", "/api/products", "/api/users/me/extra"] {
        let (status, body) = send(&app.router, "GET", path, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body, json!({ "error": "Unknown endpoint" }));
    }
}

#[tokio::test]
async fn test_unsupported_method_is_unknown_endpoint() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "DELETE", "/api/users", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown endpoint");

    let (status, _) = send(&app.router, "GET", "/api/users/login", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Storefront API");
    assert!(body["paths"]["/api/users/login"].is_object());
}
