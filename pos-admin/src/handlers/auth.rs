use crate::handlers::{navigation::NAV_STATE_KEY, render, session_error};
use crate::models::{AuthSession, SESSION_KEY};
use crate::services::ApiClient;
use crate::utils::htmx::redirect;
use crate::utils::jwt::decode_session_claims;
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use service_core::error::AppError;
use tower_sessions::Session;
use validator::Validate;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

fn login_error(message: &'static str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(format!("<p class='error'>{}</p>", message)),
    )
        .into_response()
}

pub async fn login_page() -> Result<Response, AppError> {
    render(&LoginTemplate {})
}

/// Exchanges credentials for an access token and opens the session from the
/// token's claims.
pub async fn login_handler(
    State(state): State<AppState>,
    store: Session,
    headers: HeaderMap,
    Form(payload): Form<LoginRequest>,
) -> Result<Response, AppError> {
    if payload.validate().is_err() {
        return Ok(login_error("Enter a valid email and password"));
    }

    let response = state
        .api_client
        .post(
            "/auth/login",
            serde_json::json!({
                "email": payload.email,
                "password": payload.password,
            }),
        )
        .await;

    let tokens = match response {
        Ok(res) if res.status().is_success() => res.json::<TokenResponse>().await.ok(),
        Ok(res) => {
            tracing::info!(status = %res.status(), "Login rejected by API");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Login request failed");
            None
        }
    };
    let Some(tokens) = tokens else {
        return Ok(login_error("Invalid email or password"));
    };

    let session = match decode_session_claims(&tokens.access_token) {
        Ok(claims) => claims.into_session(tokens.access_token),
        Err(e) => {
            tracing::error!("Failed to decode session claims: {}", e);
            return Ok(login_error("Authentication error"));
        }
    };

    store.cycle_id().await.map_err(session_error)?;
    store.remove::<serde_json::Value>(NAV_STATE_KEY).await.map_err(session_error)?;
    store.insert(SESSION_KEY, &session).await.map_err(session_error)?;

    tracing::info!(
        user_id = %session.user_id,
        role = %session.role,
        business_id = ?session.business_id,
        "User logged in successfully"
    );

    Ok(redirect(&headers, "/dashboard"))
}

/// Revoke `access_token` with the API. Any non-success answer is an error.
pub async fn revoke_token(api: &ApiClient, access_token: &str) -> anyhow::Result<()> {
    let response = api
        .post("/auth/logout", serde_json::json!({ "token": access_token }))
        .await?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Token revocation returned {}", status);
    }
    Ok(())
}

/// Revokes the token (best effort) and destroys the session, navigation
/// state included.
pub async fn logout_handler(
    State(state): State<AppState>,
    store: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(session) = store
        .get::<AuthSession>(SESSION_KEY)
        .await
        .map_err(session_error)?
    {
        match revoke_token(&state.api_client, &session.access_token).await {
            Ok(()) => tracing::info!(user_id = %session.user_id, "User logged out"),
            Err(e) => tracing::warn!(
                user_id = %session.user_id,
                error = %e,
                "Failed to revoke token during logout"
            ),
        }
    }

    store.flush().await.map_err(session_error)?;

    Ok(redirect(&headers, "/login"))
}
