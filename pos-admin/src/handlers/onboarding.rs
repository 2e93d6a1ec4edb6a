use crate::handlers::render;
use crate::models::AuthSession;
use askama::Template;
use axum::response::Response;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "onboarding.html")]
pub struct OnboardingTemplate {
    pub user_name: String,
    pub has_business: bool,
}

pub async fn onboarding_page(session: AuthSession) -> Result<Response, AppError> {
    render(&OnboardingTemplate {
        user_name: session.display_name().to_string(),
        has_business: session.has_business(),
    })
}
