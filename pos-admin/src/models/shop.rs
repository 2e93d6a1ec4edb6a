use serde::{Deserialize, Serialize};

/// Shop as listed by the remote API. Only the count matters to the
/// onboarding gate; unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub business_id: Option<i64>,
}
