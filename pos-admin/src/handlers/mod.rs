pub mod app;
pub mod auth;
pub mod metrics;
pub mod navigation;
pub mod onboarding;
pub mod pages;

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use service_core::error::AppError;

/// Render an askama template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Response, AppError> {
    template
        .render()
        .map(|body| Html(body).into_response())
        .map_err(|e| AppError::TemplateError(e.to_string()))
}

pub(crate) fn session_error(e: tower_sessions::session::Error) -> AppError {
    AppError::SessionError(e.to_string())
}
