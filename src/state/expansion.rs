//! Expand/collapse bookkeeping for tree rows.
//!
//! Pure set membership over [`NodeId`]; knows nothing about the tree
//! store. The tracker does not notice entity deletion on its own:
//! whoever deletes an entity must call [`ExpansionTracker::evict`] for
//! its node (and its descendants' nodes) so the expanded set never
//! holds a dangling identifier. [`crate::state::DashboardState`] does
//! this on every delete path.

use crate::model::NodeId;
use std::collections::HashSet;

/// The set of currently expanded tree rows.
#[derive(Debug, Clone, Default)]
pub struct ExpansionTracker {
    expanded: HashSet<NodeId>,
}

impl ExpansionTracker {
    /// Create a tracker with everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node is currently expanded.
    pub fn is_expanded(&self, node: &NodeId) -> bool {
        self.expanded.contains(node)
    }

    /// Flip a node between expanded and collapsed.
    /// Returns the new state: `true` means now expanded.
    pub fn toggle(&mut self, node: NodeId) -> bool {
        if self.expanded.remove(&node) {
            false
        } else {
            self.expanded.insert(node);
            true
        }
    }

    /// Expand every node in the given set.
    pub fn expand_all(&mut self, nodes: impl IntoIterator<Item = NodeId>) {
        self.expanded.extend(nodes);
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drop a node from the expanded set, expanded or not.
    /// Returns `true` if the node was expanded. Call this for every
    /// deleted entity; see the module docs.
    pub fn evict(&mut self, node: &NodeId) -> bool {
        self.expanded.remove(node)
    }

    /// Number of currently expanded nodes.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "expansion_tests.rs"]
mod tests;
