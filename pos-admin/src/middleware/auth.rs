use crate::models::{AuthSession, SESSION_KEY};
use crate::utils::htmx::redirect;
use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tower_sessions::Session;

/// Requires a logged-in session and exposes it to downstream layers and
/// handlers as a request extension.
pub async fn auth_middleware(session: Session, mut request: Request<Body>, next: Next) -> Response {
    match session.get::<AuthSession>(SESSION_KEY).await {
        Ok(Some(auth)) => {
            request.extensions_mut().insert(auth);
            next.run(request).await
        }
        Ok(None) => redirect(request.headers(), "/login"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read session store");
            redirect(request.headers(), "/login")
        }
    }
}
