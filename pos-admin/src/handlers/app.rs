use axum::response::{IntoResponse, Redirect};

pub async fn index() -> impl IntoResponse {
    Redirect::to("/dashboard")
}

pub async fn health_check() -> &'static str {
    "OK"
}
