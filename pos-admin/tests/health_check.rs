mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_string, shop_list, spawn_app};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app(shop_list(1)).await;

    let response = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = spawn_app(shop_list(1)).await;

    let response = app
        .send(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = spawn_app(shop_list(1)).await;
    app.send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;

    let response = app
        .send(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("pos_admin_http_requests_total"));
}

#[tokio::test]
async fn index_redirects_to_dashboard() {
    let app = spawn_app(shop_list(1)).await;

    let response = app
        .send(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/dashboard");
}

#[tokio::test]
async fn protected_pages_require_login() {
    let app = spawn_app(shop_list(1)).await;

    for uri in ["/dashboard", "/stock", "/onboarding", "/nav"] {
        let response = app
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers()[header::LOCATION], "/login", "{uri}");
    }
}

#[tokio::test]
async fn htmx_requests_without_session_get_hx_redirect() {
    let app = spawn_app(shop_list(1)).await;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/nav/toggle/sales")
                .header("HX-Request", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["HX-Redirect"], "/login");
}

#[tokio::test]
async fn login_page_renders() {
    let app = spawn_app(shop_list(1)).await;

    let response = app
        .send(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("hx-post=\"/login\""));
}

#[tokio::test]
async fn rejected_credentials_show_an_error() {
    let app = spawn_app(shop_list(1)).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad"})))
        .mount(&app.api)
        .await;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("email=owner%40shop.test&password=wrong"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.headers().contains_key(header::SET_COOKIE));
    assert!(body_string(response)
        .await
        .contains("Invalid email or password"));
}

#[tokio::test]
async fn malformed_login_form_is_rejected_before_calling_the_api() {
    let app = spawn_app(shop_list(1)).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api)
        .await;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("email=not-an-email&password="))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn arbitrary_paths_do_not_grow_request_series() {
    let app = spawn_app(shop_list(1)).await;

    for i in 0..25 {
        let response = app
            .send(
                Request::builder()
                    .uri(format!("/stray-path-{}", i))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = app
        .send(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await;
    let exposed = body_string(response).await;

    assert!(!exposed.contains("stray-path-"));
    assert!(exposed.contains(r#"path="/*section""#));
}
