use crate::models::AuthSession;
use crate::onboarding::{OnboardingDecision, OnboardingGate};
use crate::services::metrics::ONBOARDING_DECISIONS_TOTAL;
use crate::utils::htmx::redirect;
use crate::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

/// Guards protected views. Each request mounts a fresh gate; if the client
/// goes away the request future is dropped and the gate with it.
///
/// Must run inside `auth_middleware`.
pub async fn onboarding_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(session) = request.extensions().get::<AuthSession>().cloned() else {
        return redirect(request.headers(), "/login");
    };

    let user_id = session.user_id.clone();
    let mut gate = OnboardingGate::mount(session, state.shops.clone());
    let decision = gate.decision().await;
    drop(gate);

    ONBOARDING_DECISIONS_TOTAL
        .with_label_values(&[decision.as_str()])
        .inc();

    match decision {
        OnboardingDecision::Pass => next.run(request).await,
        OnboardingDecision::Redirect => {
            tracing::info!(
                user_id = %user_id,
                path = %request.uri().path(),
                "Business not provisioned, redirecting to onboarding"
            );
            redirect(request.headers(), &state.onboarding.path)
        }
        OnboardingDecision::Loading => AppError::ServiceUnavailable.into_response(),
    }
}
