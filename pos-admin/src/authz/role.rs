use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Broad authority level of an authenticated actor. Exactly one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    BusinessOwner,
    BusinessManager,
    ShopManager,
    SalesRep,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::BusinessOwner,
        Role::BusinessManager,
        Role::ShopManager,
        Role::SalesRep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::BusinessOwner => "BUSINESS_OWNER",
            Role::BusinessManager => "BUSINESS_MANAGER",
            Role::ShopManager => "SHOP_MANAGER",
            Role::SalesRep => "SALES_REP",
        }
    }

    /// Roles that are never blocked by a missing backend grant.
    pub fn bypasses_permissions(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::BusinessOwner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
