use super::node::{NavGroup, NavLeaf};
use serde::{Deserialize, Serialize};

/// Expand/collapse and route state of a mounted navigation surface.
///
/// At most one group is expanded at a time. The state lives only as long as
/// the surface: mounting always starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationUiState {
    expanded: Option<String>,
    current_route: String,
}

/// Result of a user interaction with a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavInteraction {
    /// Disabled or unknown entry; nothing changes and no navigation happens.
    Ignored,
    Toggled { expanded: Option<String> },
    Navigate { route: String },
}

impl NavigationUiState {
    pub fn mount(current_route: impl Into<String>) -> Self {
        Self {
            expanded: None,
            current_route: current_route.into(),
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.as_deref() == Some(group_id)
    }

    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.current_route = route.into();
    }

    /// Exclusive accordion: the same id collapses, any other id replaces the
    /// expanded group.
    pub fn toggle(&mut self, group_id: &str) {
        if self.is_expanded(group_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(group_id.to_string());
        }
    }

    pub fn click_group(&mut self, group: &NavGroup) -> NavInteraction {
        if group.disabled {
            return NavInteraction::Ignored;
        }
        self.toggle(group.id);
        NavInteraction::Toggled {
            expanded: self.expanded.clone(),
        }
    }

    /// Selecting an enabled leaf fires `on_close` (dismisses an overlay
    /// menu) and navigates. Disabled leaves do neither.
    pub fn select_leaf<F>(&self, leaf: &NavLeaf, on_close: F) -> NavInteraction
    where
        F: FnOnce(),
    {
        if leaf.disabled {
            return NavInteraction::Ignored;
        }
        on_close();
        NavInteraction::Navigate {
            route: leaf.route.to_string(),
        }
    }
}

/// Exact match only: no prefixes, no parameters.
pub fn is_leaf_active(leaf: &NavLeaf, current_route: &str) -> bool {
    leaf.route == current_route
}

/// A group is styled active when one of its (visible) children is active.
/// This never expands it.
pub fn is_group_active(group: &NavGroup, current_route: &str) -> bool {
    group
        .children
        .iter()
        .any(|child| is_leaf_active(child, current_route))
}
