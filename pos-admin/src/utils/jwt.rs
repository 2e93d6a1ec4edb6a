use crate::authz::{Permission, Role};
use crate::models::{AuthSession, ShopRef};
use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

/// Session claims carried in the access token issued by the POS API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub business_id: Option<i64>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    pub exp: i64,
}

impl SessionClaims {
    pub fn into_session(self, access_token: impl Into<String>) -> AuthSession {
        AuthSession {
            user_id: self.sub,
            email: self.email,
            role: self.role,
            business_id: self.business_id,
            shop: self.shop,
            permissions: self
                .permissions
                .unwrap_or_default()
                .into_iter()
                .map(Permission::from)
                .collect(),
            access_token: access_token.into(),
        }
    }
}

/// Decode JWT claims without validation
///
/// The token is received directly from the POS API in the login response, so
/// only its payload is read here; the API validates it on every call.
pub fn decode_session_claims(token: &str) -> Result<SessionClaims> {
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        return Err(anyhow::anyhow!("Invalid JWT format"));
    }

    let payload = general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| anyhow::anyhow!("Failed to decode JWT payload: {}", e))?;

    let claims: SessionClaims = serde_json::from_slice(&payload)
        .map_err(|e| anyhow::anyhow!("Failed to parse JWT claims: {}", e))?;

    Ok(claims)
}

/// Unsigned token with the given claims, for tests.
#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}
