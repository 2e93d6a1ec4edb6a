//! Adaptive navigation: compiled-in trees, per-session filtering, accordion
//! state and the sidebar render model.

pub mod filter;
pub mod menu;
pub mod node;
pub mod state;
pub mod trees;

pub use filter::filter_tree;
pub use menu::{MenuEntry, MenuItem, NavigationMenu};
pub use node::{FilteredTree, NavGroup, NavLeaf, NavNode, NavigationTree, TreeCategory};
pub use state::{is_group_active, is_leaf_active, NavInteraction, NavigationUiState};
pub use trees::{admin_tree, business_tree, tree_for};

use crate::models::session::AuthSession;

/// Filtered tree for the session's category.
pub fn visible_tree(session: &AuthSession) -> FilteredTree {
    filter_tree(tree_for(session.role), Some(session))
}
