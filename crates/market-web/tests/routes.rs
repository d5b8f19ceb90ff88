//! Route-level tests for the dashboard server against a mocked backend

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use market_core::Config;
use market_web::build_app;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order_json(id: &str, status: &str, customer: &str) -> Value {
    json!({
        "id": id,
        "customer_name": customer,
        "vendor_id": "v-1",
        "status": status,
        "payment": "CARD",
        "total": 10.0,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

fn app_for(server: &MockServer) -> Router {
    let mut config = Config::default();
    config.backend.base_url = server.uri();
    config.session.secure = false;
    build_app(config).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_requires_no_session() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_routes_reject_missing_session_cookie() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vendors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn list_proxies_backend_and_applies_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                order_json("1", "PENDING", "A"),
                order_json("2", "COMPLETED", "B")
            ]
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/orders?status=COMPLETED")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "2");
}

#[tokio::test]
async fn list_forwards_pagination_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .and(query_param("page", "3"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/orders?page=3&limit=10")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_resource_is_404() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/drivers")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn backend_failure_maps_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/orders")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "backend_error");
}

#[tokio::test]
async fn backend_declared_failure_is_not_http_success() {
    let server = MockServer::start().await;
    // A 2xx response whose body declares failure.
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "permission denied"
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/orders")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "backend_error");
    assert_eq!(body["message"], "permission denied");
}

#[tokio::test]
async fn update_with_empty_body_is_a_no_op() {
    let server = MockServer::start().await;
    // Nothing may reach the backend.
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/orders/o1")
                .header(header::COOKIE, "admin_token=tok-1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "no changes");
}

#[tokio::test]
async fn delete_proxies_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/labels/l-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/labels/l-1")
                .header(header::COOKIE, "admin_token=tok-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_sets_session_cookies_with_remember_me_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-99",
                "user": {"name": "Dana", "role": "admin"}
            }
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "email=dana%40example.com&password=hunter2&remember=true",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<&str> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();

    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("admin_token=tok-99")));
    assert!(cookies.iter().any(|c| c.starts_with("admin_user=")));
    // remember=true extends the lifetime to 30 days
    assert!(cookies.iter().all(|c| c.contains("Max-Age=2592000")));
}

#[tokio::test]
async fn login_failure_passes_backend_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "bad credentials"})),
        )
        .mount(&server)
        .await;

    let app = app_for(&server);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("email=dana%40example.com&password=nope"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "bad credentials");
}

#[tokio::test]
async fn me_returns_role_and_display_settings() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/me")
                .header(
                    header::COOKIE,
                    "admin_token=tok-1; admin_user=%7B%22name%22%3A%22Dana%22%2C%22role%22%3A%22admin%22%7D",
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["user"]["name"], "Dana");
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert_eq!(body["data"]["currency_symbol"], "$");
}

#[tokio::test]
async fn me_without_session_is_401() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_malformed_role_cookie_is_401() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/me")
                .header(header::COOKIE, "admin_token=tok-1; admin_user=%7Bnot-json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_both_cookies() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<&str> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();

    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}
