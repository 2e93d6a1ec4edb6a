use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{
    app::{health_check, index},
    auth::{login_handler, login_page, logout_handler},
    metrics::metrics,
    navigation::{navigation_handler, select_handler, toggle_handler},
    onboarding::onboarding_page,
    pages::{dashboard_handler, section_handler},
};
use crate::middleware::{
    auth::auth_middleware, metrics::metrics_middleware, navigation::visible_route_middleware,
    onboarding::onboarding_middleware,
};
use crate::AppState;

pub fn build_router(state: AppState, secure_cookies: bool) -> Router {
    // Session setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    // Views behind the onboarding gate. Layers run last-added first: auth,
    // then the menu route check, then the gate.
    let gated = Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/*section", get(section_handler))
        .route_layer(from_fn_with_state(state.clone(), onboarding_middleware))
        .route_layer(from_fn(visible_route_middleware))
        .route_layer(from_fn(auth_middleware));

    let authenticated = Router::new()
        .route("/onboarding", get(onboarding_page))
        .route("/nav", get(navigation_handler))
        .route("/nav/toggle/:group_id", post(toggle_handler))
        .route("/nav/select", post(select_handler))
        .route_layer(from_fn(auth_middleware));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/login", get(login_page).post(login_handler))
        .route("/logout", post(logout_handler))
        .merge(authenticated)
        .merge(gated)
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
