use super::node::{FilteredTree, NavLeaf, NavNode};
use super::state::{is_group_active, is_leaf_active, NavigationUiState};
use serde::Serialize;

/// One rendered leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub active: bool,
    pub disabled: bool,
}

/// One rendered root entry. Groups have `children`, leaves have a `route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub is_group: bool,
    /// Group id, or the route for leaves.
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub active: bool,
    pub expanded: bool,
    pub disabled: bool,
    pub children: Vec<MenuItem>,
}

/// Render model for the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationMenu {
    pub current_route: String,
    pub expanded: Option<String>,
    pub entries: Vec<MenuEntry>,
}

fn item(leaf: &NavLeaf, current_route: &str) -> MenuItem {
    MenuItem {
        name: leaf.name,
        route: leaf.route,
        icon: leaf.icon,
        active: is_leaf_active(leaf, current_route),
        disabled: leaf.disabled,
    }
}

impl NavigationMenu {
    pub fn build(tree: &FilteredTree, state: &NavigationUiState) -> Self {
        let route = state.current_route();
        let entries = tree
            .nodes
            .iter()
            .map(|node| match node {
                NavNode::Leaf(leaf) => MenuEntry {
                    is_group: false,
                    id: leaf.route,
                    name: leaf.name,
                    icon: leaf.icon,
                    route: leaf.route,
                    active: is_leaf_active(leaf, route),
                    expanded: false,
                    disabled: leaf.disabled,
                    children: Vec::new(),
                },
                NavNode::Group(group) => MenuEntry {
                    is_group: true,
                    id: group.id,
                    name: group.name,
                    icon: group.icon,
                    route: "",
                    active: is_group_active(group, route),
                    expanded: state.is_expanded(group.id),
                    disabled: group.disabled,
                    children: group.children.iter().map(|c| item(c, route)).collect(),
                },
            })
            .collect();

        Self {
            current_route: route.to_string(),
            expanded: state.expanded().map(str::to_string),
            entries,
        }
    }
}
