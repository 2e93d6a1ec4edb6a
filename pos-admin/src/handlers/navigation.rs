use crate::handlers::{render, session_error};
use crate::models::AuthSession;
use crate::navigation::{
    visible_tree, FilteredTree, NavInteraction, NavigationMenu, NavigationUiState,
};
use crate::utils::htmx::{current_path, hx_redirect, HX_TRIGGER, NAV_CLOSE_EVENT};
use askama::Template;
use axum::{
    extract::{Path, Query},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use tower_sessions::Session;

/// Web-session key of the mounted sidebar's UI state.
pub const NAV_STATE_KEY: &str = "nav_state";

#[derive(Template)]
#[template(path = "partials/sidebar.html")]
pub struct SidebarTemplate {
    pub menu: NavigationMenu,
}

/// Mount the navigation surface at `route`: fresh, fully collapsed state.
pub async fn mount_navigation(
    store: &Session,
    session: &AuthSession,
    route: &str,
) -> Result<NavigationMenu, AppError> {
    let state = NavigationUiState::mount(route);
    store
        .insert(NAV_STATE_KEY, &state)
        .await
        .map_err(session_error)?;
    Ok(NavigationMenu::build(&visible_tree(session), &state))
}

/// State of the mounted surface; mounts one if the page never did.
async fn mounted_state(
    store: &Session,
    headers: &HeaderMap,
) -> Result<NavigationUiState, AppError> {
    let state = store
        .get::<NavigationUiState>(NAV_STATE_KEY)
        .await
        .map_err(session_error)?;

    Ok(state.unwrap_or_else(|| {
        let route = current_path(headers).unwrap_or_else(|| "/dashboard".to_string());
        NavigationUiState::mount(route)
    }))
}

#[derive(Deserialize)]
pub struct NavQuery {
    pub route: Option<String>,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub tree: FilteredTree,
    pub expanded: Option<String>,
    pub current_route: String,
    pub menu: NavigationMenu,
}

/// Mounts the surface and returns the session's filtered tree with its
/// render model.
pub async fn navigation_handler(
    store: Session,
    session: AuthSession,
    headers: HeaderMap,
    Query(query): Query<NavQuery>,
) -> Result<Json<NavigationResponse>, AppError> {
    let route = query
        .route
        .or_else(|| current_path(&headers))
        .unwrap_or_else(|| "/dashboard".to_string());

    let menu = mount_navigation(&store, &session, &route).await?;

    Ok(Json(NavigationResponse {
        tree: visible_tree(&session),
        expanded: menu.expanded.clone(),
        current_route: route,
        menu,
    }))
}

pub async fn toggle_handler(
    store: Session,
    session: AuthSession,
    headers: HeaderMap,
    Path(group_id): Path<String>,
) -> Result<Response, AppError> {
    let tree = visible_tree(&session);
    let Some(group) = tree.group(&group_id) else {
        tracing::debug!(group_id = %group_id, "Toggle for group not visible to session");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let mut state = mounted_state(&store, &headers).await?;
    if state.click_group(group) == NavInteraction::Ignored {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    store
        .insert(NAV_STATE_KEY, &state)
        .await
        .map_err(session_error)?;

    render(&SidebarTemplate {
        menu: NavigationMenu::build(&tree, &state),
    })
}

#[derive(Deserialize)]
pub struct SelectForm {
    pub route: String,
}

/// Leaf selection: navigates and asks the overlay menu to close. Disabled
/// or hidden leaves get an empty `204`.
pub async fn select_handler(
    store: Session,
    session: AuthSession,
    headers: HeaderMap,
    Form(form): Form<SelectForm>,
) -> Result<Response, AppError> {
    let tree = visible_tree(&session);
    let Some(leaf) = tree.leaf_by_route(&form.route) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let state = mounted_state(&store, &headers).await?;
    let mut close_overlay = false;
    let outcome = state.select_leaf(leaf, || close_overlay = true);

    match outcome {
        NavInteraction::Navigate { route } => {
            let mut response = hx_redirect(&route);
            if close_overlay {
                response
                    .headers_mut()
                    .insert(HX_TRIGGER, HeaderValue::from_static(NAV_CLOSE_EVENT));
            }
            Ok(response)
        }
        NavInteraction::Ignored | NavInteraction::Toggled { .. } => {
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}
