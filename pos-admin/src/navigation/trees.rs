use super::node::{NavGroup, NavLeaf, NavigationTree, TreeCategory};
use crate::authz::permission::*;
use crate::authz::Role;
use once_cell::sync::Lazy;

static ADMIN_TREE: Lazy<NavigationTree> = Lazy::new(|| {
    NavigationTree::new(
        TreeCategory::Administrative,
        vec![
            NavLeaf::new("Dashboard", "/dashboard").icon("home").into(),
            NavLeaf::new("Businesses", "/admin/businesses")
                .icon("building")
                .requires(MANAGE_BUSINESSES)
                .into(),
            NavGroup::new(
                "subscriptions",
                "Subscriptions",
                vec![
                    NavLeaf::new("Plans", "/admin/plans").requires(MANAGE_PLANS),
                    NavLeaf::new("Subscribers", "/admin/subscriptions").requires(MANAGE_PLANS),
                ],
            )
            .icon("credit-card")
            .requires(MANAGE_PLANS)
            .into(),
            NavLeaf::new("Users", "/admin/users")
                .icon("users")
                .requires(MANAGE_USERS)
                .into(),
            NavLeaf::new("Profile", "/profile").icon("user").into(),
        ],
    )
});

static BUSINESS_TREE: Lazy<NavigationTree> = Lazy::new(|| {
    NavigationTree::new(
        TreeCategory::Business,
        vec![
            NavLeaf::new("Dashboard", "/dashboard").icon("home").into(),
            NavGroup::new(
                "sales",
                "Sales",
                vec![
                    NavLeaf::new("New Sale", "/sales/new").requires(CREATE_SALES),
                    NavLeaf::new("Sales History", "/sales").requires(VIEW_SALES),
                    NavLeaf::new("Returns", "/sales/returns").requires(PROCESS_RETURNS),
                ],
            )
            .icon("shopping-cart")
            .requires(VIEW_SALES)
            .into(),
            NavGroup::new(
                "inventory",
                "Inventory",
                vec![
                    NavLeaf::new("Products", "/products").requires(VIEW_PRODUCTS),
                    NavLeaf::new("Categories", "/products/categories")
                        .requires(MANAGE_PRODUCT_CATEGORIES),
                    NavLeaf::new("Stock Levels", "/stock").requires(VIEW_STOCK),
                    NavLeaf::new("Stock Adjustments", "/stock/adjustments")
                        .requires(MANAGE_STOCK),
                ],
            )
            .icon("package")
            .requires(VIEW_PRODUCTS)
            .into(),
            NavGroup::new(
                "expenses",
                "Expenses",
                vec![
                    NavLeaf::new("Record Expense", "/expenses/new").requires(CREATE_EXPENSES),
                    NavLeaf::new("All Expenses", "/expenses").requires(VIEW_EXPENSES),
                ],
            )
            .icon("receipt")
            .requires(VIEW_EXPENSES)
            .into(),
            NavGroup::new(
                "people",
                "People",
                vec![
                    NavLeaf::new("Employees", "/employees").requires(MANAGE_EMPLOYEES),
                    NavLeaf::new("Payroll", "/payroll").requires(MANAGE_PAYROLL),
                ],
            )
            .icon("users")
            .requires(MANAGE_EMPLOYEES)
            .into(),
            NavGroup::new(
                "suppliers",
                "Suppliers",
                vec![
                    NavLeaf::new("Suppliers", "/suppliers").requires(VIEW_SUPPLIERS),
                    NavLeaf::new("Purchase Orders", "/suppliers/orders")
                        .requires(MANAGE_SUPPLIERS),
                ],
            )
            .icon("truck")
            .requires(VIEW_SUPPLIERS)
            .into(),
            NavLeaf::new("Shops", "/shops")
                .icon("store")
                .requires(MANAGE_SHOPS)
                .into(),
            NavGroup::new(
                "reports",
                "Reports",
                vec![
                    NavLeaf::new("Sales Report", "/reports/sales").requires(VIEW_REPORTS),
                    NavLeaf::new("Stock Report", "/reports/stock").requires(VIEW_REPORTS),
                    // Not shipped yet.
                    NavLeaf::new("Analytics", "/reports/analytics")
                        .requires(VIEW_REPORTS)
                        .disabled(),
                ],
            )
            .icon("bar-chart")
            .requires(VIEW_REPORTS)
            .into(),
            NavLeaf::new("Subscription", "/subscription")
                .icon("credit-card")
                .requires(MANAGE_SUBSCRIPTION)
                .into(),
            NavLeaf::new("Profile", "/profile").icon("user").into(),
        ],
    )
});

pub fn admin_tree() -> &'static NavigationTree {
    &ADMIN_TREE
}

pub fn business_tree() -> &'static NavigationTree {
    &BUSINESS_TREE
}

/// Platform administrators get the administrative tree, every role working
/// inside a business gets the operational one.
pub fn tree_for(role: Role) -> &'static NavigationTree {
    match role {
        Role::SuperAdmin => admin_tree(),
        Role::BusinessOwner | Role::BusinessManager | Role::ShopManager | Role::SalesRep => {
            business_tree()
        }
    }
}
