use super::node::{FilteredTree, NavGroup, NavNode, NavigationTree};
use crate::authz::{has_permission, Permission};
use crate::models::session::AuthSession;

fn is_visible(permission: Option<&Permission>, session: Option<&AuthSession>) -> bool {
    permission.map_or(true, |p| has_permission(session, p.as_str()))
}

/// Visible subset of `tree` for `session`, in source order.
///
/// A group is shown iff at least one of its children is; the group's own
/// `permission` is not consulted.
pub fn filter_tree(tree: &NavigationTree, session: Option<&AuthSession>) -> FilteredTree {
    let nodes = tree
        .nodes
        .iter()
        .filter_map(|node| match node {
            NavNode::Leaf(leaf) => {
                is_visible(leaf.permission.as_ref(), session).then(|| NavNode::Leaf(leaf.clone()))
            }
            NavNode::Group(group) => {
                let children: Vec<_> = group
                    .children
                    .iter()
                    .filter(|child| is_visible(child.permission.as_ref(), session))
                    .cloned()
                    .collect();

                (!children.is_empty()).then(|| {
                    NavNode::Group(NavGroup {
                        children,
                        ..group.clone()
                    })
                })
            }
        })
        .collect();

    FilteredTree {
        category: tree.category,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Role;
    use crate::navigation::node::{NavLeaf, TreeCategory};
    use crate::navigation::trees::business_tree;

    fn names(tree: &FilteredTree) -> Vec<&'static str> {
        tree.nodes.iter().map(NavNode::name).collect()
    }

    fn child_names(tree: &FilteredTree, group_id: &str) -> Vec<&'static str> {
        tree.group(group_id)
            .map(|g| g.children.iter().map(|c| c.name).collect())
            .unwrap_or_default()
    }

    fn sample_tree() -> NavigationTree {
        NavigationTree::new(
            TreeCategory::Business,
            vec![
                NavLeaf::new("Home", "/home").into(),
                NavLeaf::new("Secret", "/secret")
                    .requires(Permission::from_static("SECRET"))
                    .into(),
                // Group permission would fail for a sales rep, one child passes
                NavGroup::new(
                    "stock",
                    "Stock",
                    vec![
                        NavLeaf::new("Adjust", "/stock/adjust")
                            .requires(Permission::from_static("MANAGE_STOCK")),
                        NavLeaf::new("Levels", "/stock").requires(Permission::from_static("VIEW_STOCK")),
                        NavLeaf::new("Help", "/stock/help"),
                    ],
                )
                .requires(Permission::from_static("MANAGE_STOCK"))
                .into(),
                // Group permission would pass for a sales rep, no child does
                NavGroup::new(
                    "payroll",
                    "Payroll",
                    vec![NavLeaf::new("Runs", "/payroll")
                        .requires(Permission::from_static("MANAGE_PAYROLL"))],
                )
                .requires(Permission::from_static("VIEW_SALES"))
                .into(),
                NavLeaf::new("Profile", "/profile").into(),
            ],
        )
    }

    #[test]
    fn test_no_session_keeps_only_unrestricted_leaves() {
        let filtered = filter_tree(&sample_tree(), None);
        assert_eq!(names(&filtered), vec!["Home", "Stock", "Profile"]);
        assert_eq!(child_names(&filtered, "stock"), vec!["Help"]);

        let filtered = filter_tree(business_tree(), None);
        assert_eq!(names(&filtered), vec!["Dashboard", "Profile"]);
    }

    #[test]
    fn test_group_shown_when_a_child_is_visible_despite_own_permission() {
        let rep = AuthSession::new("u", "rep@shop.test", Role::SalesRep);
        let filtered = filter_tree(&sample_tree(), Some(&rep));

        let stock = filtered.group("stock").expect("stock group visible");
        assert_eq!(
            stock.permission,
            Some(Permission::from_static("MANAGE_STOCK"))
        );
        assert_eq!(child_names(&filtered, "stock"), vec!["Levels", "Help"]);
    }

    #[test]
    fn test_group_hidden_when_no_child_is_visible_despite_own_permission() {
        let rep = AuthSession::new("u", "rep@shop.test", Role::SalesRep);
        assert!(has_permission(Some(&rep), "VIEW_SALES"));

        let filtered = filter_tree(&sample_tree(), Some(&rep));
        assert!(filtered.group("payroll").is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let owner = AuthSession::new("u", "owner@shop.test", Role::BusinessOwner);
        let filtered = filter_tree(&sample_tree(), Some(&owner));
        assert_eq!(
            names(&filtered),
            vec!["Home", "Secret", "Stock", "Payroll", "Profile"]
        );
        assert_eq!(child_names(&filtered, "stock"), vec!["Adjust", "Levels", "Help"]);

        let rep = AuthSession::new("u", "rep@shop.test", Role::SalesRep);
        let filtered = filter_tree(business_tree(), Some(&rep));
        assert_eq!(
            names(&filtered),
            vec!["Dashboard", "Sales", "Inventory", "Profile"]
        );
        assert_eq!(child_names(&filtered, "sales"), vec!["New Sale", "Sales History"]);
        assert_eq!(child_names(&filtered, "inventory"), vec!["Products", "Stock Levels"]);
    }

    #[test]
    fn test_shop_manager_business_tree() {
        let manager = AuthSession::new("u", "mgr@shop.test", Role::ShopManager);
        let filtered = filter_tree(business_tree(), Some(&manager));
        assert_eq!(
            names(&filtered),
            vec![
                "Dashboard",
                "Sales",
                "Inventory",
                "Expenses",
                "People",
                "Shops",
                "Reports",
                "Profile"
            ]
        );
        assert_eq!(child_names(&filtered, "sales"), vec!["Sales History", "Returns"]);
        assert_eq!(child_names(&filtered, "people"), vec!["Employees"]);
        assert!(filtered.group("suppliers").is_none());
    }

    #[test]
    fn test_explicit_grant_reveals_group() {
        let manager = AuthSession::new("u", "mgr@shop.test", Role::ShopManager)
            .with_permissions(["VIEW_SUPPLIERS"]);
        let filtered = filter_tree(business_tree(), Some(&manager));
        assert_eq!(child_names(&filtered, "suppliers"), vec!["Suppliers"]);
    }

    #[test]
    fn test_owner_sees_whole_tree() {
        let owner = AuthSession::new("u", "owner@shop.test", Role::BusinessOwner);
        let filtered = filter_tree(business_tree(), Some(&owner));
        assert_eq!(filtered.nodes, business_tree().nodes);
    }

    #[test]
    fn test_filter_does_not_touch_source_tree() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = filter_tree(&tree, None);
        assert_eq!(tree, before);
    }
}
