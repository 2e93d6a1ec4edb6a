//! Permission resolution for authenticated sessions.
//!
//! Evaluation order, first match wins:
//! 1. no session: nothing is granted
//! 2. `SUPER_ADMIN` / `BUSINESS_OWNER`: everything is granted
//! 3. the role's implicit grants
//! 4. the session's explicit grants
//!
//! Everything here is pure and cheap enough to call per menu entry per render.

pub mod permission;
pub mod role;

pub use permission::Permission;
pub use role::{Role, UnknownRole};

use crate::models::session::AuthSession;
use once_cell::sync::Lazy;
use permission::*;
use std::collections::{HashMap, HashSet};

/// Baseline grants for roles that are not full-bypass. Backend grants add to
/// these, they never remove from them.
static IMPLICIT_GRANTS: Lazy<HashMap<Role, HashSet<Permission>>> = Lazy::new(|| {
    HashMap::from([
        (
            Role::ShopManager,
            HashSet::from([
                VIEW_PRODUCTS,
                MANAGE_EMPLOYEES,
                MANAGE_SHOPS,
                VIEW_SALES,
                VIEW_STOCK,
                MANAGE_STOCK,
                PROCESS_RETURNS,
                VIEW_REPORTS,
                CREATE_EXPENSES,
                VIEW_EXPENSES,
                MANAGE_PRODUCT_CATEGORIES,
            ]),
        ),
        (
            Role::SalesRep,
            HashSet::from([VIEW_PRODUCTS, CREATE_SALES, VIEW_SALES, VIEW_STOCK]),
        ),
    ])
});

/// Implicit grants for `role`, if it has any.
pub fn implicit_grants(role: Role) -> Option<&'static HashSet<Permission>> {
    IMPLICIT_GRANTS.get(&role)
}

pub fn has_permission(session: Option<&AuthSession>, permission: &str) -> bool {
    let Some(session) = session else {
        return false;
    };

    if session.role.bypasses_permissions() {
        return true;
    }

    if implicit_grants(session.role).is_some_and(|grants| grants.contains(permission)) {
        return true;
    }

    session.permissions.contains(permission)
}

pub fn has_role(session: Option<&AuthSession>, role: Role) -> bool {
    session.is_some_and(|s| s.role == role)
}

pub fn has_any_role(session: Option<&AuthSession>, roles: &[Role]) -> bool {
    session.is_some_and(|s| roles.contains(&s.role))
}
