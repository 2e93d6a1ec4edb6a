use crate::authz::{Permission, Role};
use crate::utils::htmx::redirect;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tower_sessions::Session;

/// Key under which the authenticated session lives in the web session store.
pub const SESSION_KEY: &str = "auth_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    pub id: i64,
}

/// The authenticated actor. Created at login, removed at logout.
///
/// Policy code only reads `role`, `business_id`, `shop` and `permissions`; the
/// remaining fields identify the user and authorise outbound API calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub business_id: Option<i64>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    /// Explicit backend grants. Absent and empty mean the same thing.
    #[serde(default)]
    pub permissions: HashSet<Permission>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub access_token: String,
}

impl AuthSession {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            role,
            business_id: None,
            shop: None,
            permissions: HashSet::new(),
            access_token: String::new(),
        }
    }

    pub fn with_business(mut self, business_id: i64) -> Self {
        self.business_id = Some(business_id);
        self
    }

    pub fn with_shop(mut self, shop_id: i64) -> Self {
        self.shop = Some(ShopRef { id: shop_id });
        self
    }

    pub fn with_permissions<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn has_business(&self) -> bool {
        self.business_id.is_some()
    }

    /// Display name derived from the email local part.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or("User")
    }
}

/// Resolves the session placed in request extensions by the auth middleware,
/// falling back to the web session store. Unauthenticated requests are sent
/// to `/login`.
#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<AuthSession>() {
            return Ok(session.clone());
        }

        let store = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract session",
                )
                    .into_response()
            })?;

        match store.get::<AuthSession>(SESSION_KEY).await {
            Ok(Some(session)) => Ok(session),
            Ok(None) => Err(redirect(&parts.headers, "/login")),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read session store");
                Err(redirect(&parts.headers, "/login"))
            }
        }
    }
}
