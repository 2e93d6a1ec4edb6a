use crate::models::AuthSession;
use crate::navigation::visible_tree;
use crate::utils::htmx::redirect;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

/// Only visible, enabled menu routes get past this layer, so unknown paths
/// never reach the onboarding gate or its shop lookup.
///
/// Must run inside `auth_middleware`.
pub async fn visible_route_middleware(request: Request<Body>, next: Next) -> Response {
    let Some(session) = request.extensions().get::<AuthSession>() else {
        return redirect(request.headers(), "/login");
    };

    let path = request.uri().path();
    let servable = visible_tree(session)
        .leaf_by_route(path)
        .is_some_and(|leaf| !leaf.disabled);

    if !servable {
        tracing::debug!(
            user_id = %session.user_id,
            path = %path,
            "No visible page at path"
        );
        return AppError::NotFound(anyhow::anyhow!("No page at {} for this session", path))
            .into_response();
    }

    next.run(request).await
}
