use crate::handlers::{navigation::mount_navigation, render};
use crate::models::AuthSession;
use crate::navigation::{visible_tree, NavigationMenu};
use askama::Template;
use axum::{http::Uri, response::Response};
use service_core::error::AppError;
use tower_sessions::Session;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user_name: String,
    pub role: String,
    pub menu: NavigationMenu,
}

#[derive(Template)]
#[template(path = "section.html")]
pub struct SectionTemplate {
    pub user_name: String,
    pub role: String,
    pub title: String,
    pub menu: NavigationMenu,
}

pub async fn dashboard_handler(
    store: Session,
    session: AuthSession,
    uri: Uri,
) -> Result<Response, AppError> {
    let menu = mount_navigation(&store, &session, uri.path()).await?;

    render(&DashboardTemplate {
        user_name: session.display_name().to_string(),
        role: session.role.to_string(),
        menu,
    })
}

/// Any other page of the menu. Only routes the session can see, and that
/// are not disabled, are served.
pub async fn section_handler(
    store: Session,
    session: AuthSession,
    uri: Uri,
) -> Result<Response, AppError> {
    let route = uri.path();
    let tree = visible_tree(&session);
    let title = match tree.leaf_by_route(route) {
        Some(leaf) if !leaf.disabled => leaf.name,
        _ => {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "No page at {} for this session",
                route
            )))
        }
    };

    let menu = mount_navigation(&store, &session, route).await?;

    render(&SectionTemplate {
        user_name: session.display_name().to_string(),
        role: session.role.to_string(),
        title: title.to_string(),
        menu,
    })
}
