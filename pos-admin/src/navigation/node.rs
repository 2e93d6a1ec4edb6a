use crate::authz::Permission;
use serde::Serialize;

/// A directly navigable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    pub name: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,
    /// Shown but not interactive.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl NavLeaf {
    pub fn new(name: &'static str, route: &'static str) -> Self {
        Self {
            name,
            route,
            icon: "circle",
            permission: None,
            disabled: false,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn requires(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A collapsible section holding leaves. Groups never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Accordion key.
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Carried for display; visibility is decided by the children alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    pub children: Vec<NavLeaf>,
}

impl NavGroup {
    pub fn new(id: &'static str, name: &'static str, children: Vec<NavLeaf>) -> Self {
        debug_assert!(!children.is_empty(), "group {id} has no children");
        Self {
            id,
            name,
            icon: "folder",
            permission: None,
            disabled: false,
            children,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn requires(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    Leaf(NavLeaf),
    Group(NavGroup),
}

impl From<NavLeaf> for NavNode {
    fn from(leaf: NavLeaf) -> Self {
        NavNode::Leaf(leaf)
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        NavNode::Group(group)
    }
}

impl NavNode {
    pub fn name(&self) -> &'static str {
        match self {
            NavNode::Leaf(leaf) => leaf.name,
            NavNode::Group(group) => group.name,
        }
    }
}

/// Which of the two compiled-in trees a session navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeCategory {
    Administrative,
    Business,
}

/// Ordered root entries of one navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTree {
    pub category: TreeCategory,
    pub nodes: Vec<NavNode>,
}

impl NavigationTree {
    pub fn new(category: TreeCategory, nodes: Vec<NavNode>) -> Self {
        Self { category, nodes }
    }
}

/// The part of a [`NavigationTree`] a session may see. Derived on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredTree {
    pub category: TreeCategory,
    pub nodes: Vec<NavNode>,
}

impl FilteredTree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn group(&self, id: &str) -> Option<&NavGroup> {
        self.nodes.iter().find_map(|node| match node {
            NavNode::Group(group) if group.id == id => Some(group),
            _ => None,
        })
    }

    /// Visible leaf with exactly this route, at the root or inside a group.
    pub fn leaf_by_route(&self, route: &str) -> Option<&NavLeaf> {
        self.nodes.iter().find_map(|node| match node {
            NavNode::Leaf(leaf) if leaf.route == route => Some(leaf),
            NavNode::Leaf(_) => None,
            NavNode::Group(group) => group.children.iter().find(|leaf| leaf.route == route),
        })
    }
}
