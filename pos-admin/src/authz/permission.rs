use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Opaque capability name issued by the backend, e.g. `VIEW_SALES`.
///
/// Permissions are compared by exact name only. `Borrow<str>` lets grant
/// sets be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&'static str> for Permission {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

// Sales
pub const CREATE_SALES: Permission = Permission::from_static("CREATE_SALES");
pub const VIEW_SALES: Permission = Permission::from_static("VIEW_SALES");
pub const PROCESS_RETURNS: Permission = Permission::from_static("PROCESS_RETURNS");

// Catalogue and stock
pub const VIEW_PRODUCTS: Permission = Permission::from_static("VIEW_PRODUCTS");
pub const MANAGE_PRODUCTS: Permission = Permission::from_static("MANAGE_PRODUCTS");
pub const MANAGE_PRODUCT_CATEGORIES: Permission =
    Permission::from_static("MANAGE_PRODUCT_CATEGORIES");
pub const VIEW_STOCK: Permission = Permission::from_static("VIEW_STOCK");
pub const MANAGE_STOCK: Permission = Permission::from_static("MANAGE_STOCK");

// Expenses
pub const CREATE_EXPENSES: Permission = Permission::from_static("CREATE_EXPENSES");
pub const VIEW_EXPENSES: Permission = Permission::from_static("VIEW_EXPENSES");

// People
pub const MANAGE_EMPLOYEES: Permission = Permission::from_static("MANAGE_EMPLOYEES");
pub const MANAGE_PAYROLL: Permission = Permission::from_static("MANAGE_PAYROLL");

// Suppliers
pub const VIEW_SUPPLIERS: Permission = Permission::from_static("VIEW_SUPPLIERS");
pub const MANAGE_SUPPLIERS: Permission = Permission::from_static("MANAGE_SUPPLIERS");

// Business setup
pub const MANAGE_SHOPS: Permission = Permission::from_static("MANAGE_SHOPS");
pub const VIEW_REPORTS: Permission = Permission::from_static("VIEW_REPORTS");
pub const MANAGE_SUBSCRIPTION: Permission = Permission::from_static("MANAGE_SUBSCRIPTION");

// Platform administration
pub const MANAGE_BUSINESSES: Permission = Permission::from_static("MANAGE_BUSINESSES");
pub const MANAGE_PLANS: Permission = Permission::from_static("MANAGE_PLANS");
pub const MANAGE_USERS: Permission = Permission::from_static("MANAGE_USERS");
