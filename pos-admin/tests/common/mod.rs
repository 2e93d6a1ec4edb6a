#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use http_body_util::BodyExt;
use pos_admin::config::{ApiSettings, OnboardingSettings};
use pos_admin::services::{ApiClient, ShopClient};
use pos_admin::startup::build_router;
use pos_admin::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub router: Router,
    pub api: MockServer,
}

/// Router wired to a stubbed POS API. `/shops` answers with `shops`.
pub async fn spawn_app(shops: ResponseTemplate) -> TestApp {
    spawn_app_with(shops, ResponseTemplate::new(204)).await
}

/// As `spawn_app`, with `/auth/logout` answering `revoke`.
pub async fn spawn_app_with(shops: ResponseTemplate, revoke: ResponseTemplate) -> TestApp {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(shops)
        .mount(&api)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(revoke)
        .mount(&api)
        .await;

    let api_client = Arc::new(
        ApiClient::new(ApiSettings {
            url: api.uri(),
            timeout_secs: 5,
        })
        .unwrap(),
    );
    let shops = Arc::new(ShopClient::new(api_client.clone()));
    let state = AppState::new(api_client, shops, OnboardingSettings::default());

    TestApp {
        router: build_router(state, false),
        api,
    }
}

pub fn shop_list(count: usize) -> ResponseTemplate {
    let shops: Vec<Value> = (1..=count)
        .map(|id| json!({"id": id, "name": format!("Shop {}", id), "businessId": 5}))
        .collect();
    ResponseTemplate::new(200).set_body_json(shops)
}

pub fn owner_claims() -> Value {
    json!({
        "sub": "owner-1",
        "email": "owner@shop.test",
        "role": "BUSINESS_OWNER",
        "businessId": 5,
        "exp": 9999999999i64
    })
}

pub fn sales_rep_claims() -> Value {
    json!({
        "sub": "rep-1",
        "email": "rep@shop.test",
        "role": "SALES_REP",
        "businessId": 5,
        "shop": {"id": 1},
        "exp": 9999999999i64
    })
}

pub fn token_for(claims: &Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in with the given token claims and return the session cookie.
    pub async fn login_as(&self, claims: Value) -> String {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": token_for(&claims)})),
            )
            .up_to_n_times(1)
            .mount(&self.api)
            .await;

        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=user%40shop.test&password=secret"))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");

        response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    /// Number of shop lookups the API has seen so far.
    pub async fn shop_lookups(&self) -> usize {
        self.api
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == "/shops")
            .count()
    }

    pub async fn get(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn htmx_post(&self, uri: &str, cookie: &str, form: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .header("HX-Request", "true")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
