//! Unlock State
//!
//! This module derives each node's purchasability from the graph.
//!
//! # How Locking Works
//!
//! A node is locked while at least one of its parents is unselected.
//! Nodes without parents are never locked. Because `selected` is the
//! authoritative terminal state and is itself never derived, the lock
//! check is a one-hop read of the parents' flags: no transitive walk and
//! no evaluation-order sensitivity.
//!
//! Every node falls into exactly one of three states, with `Selected`
//! taking priority over `Locked` and `Locked` over `Available`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{GraphStore, NodeId};

/// Three-way classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// Already purchased.
    Selected,

    /// At least one prerequisite is not yet purchased.
    Locked,

    /// Unlocked and purchasable right now.
    Available,
}

/// Snapshot of every node's state, in graph insertion order.
///
/// This is what a renderer consumes to color nodes after each purchase.
pub type StateMap = IndexMap<NodeId, NodeState>;

/// Read-only view deriving lock state from a [`GraphStore`].
#[derive(Debug, Clone, Copy)]
pub struct UnlockEngine<'g> {
    store: &'g GraphStore,
}

impl<'g> UnlockEngine<'g> {
    /// Create a view over the given store.
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    /// Has this node been purchased? Unknown ids report false.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.store.node(id).is_some_and(|n| n.is_selected())
    }

    /// Is this node locked behind an unpurchased prerequisite?
    ///
    /// True iff the node has at least one parent and some parent is not
    /// selected. Root nodes and unknown ids report false.
    pub fn is_locked(&self, id: NodeId) -> bool {
        self.store
            .parents_of(id)
            .iter()
            .any(|&parent| !self.is_selected(parent))
    }

    /// Classify a single node. None for unknown ids.
    pub fn state_of(&self, id: NodeId) -> Option<NodeState> {
        let node = self.store.node(id)?;
        let state = if node.is_selected() {
            NodeState::Selected
        } else if self.is_locked(id) {
            NodeState::Locked
        } else {
            NodeState::Available
        };
        Some(state)
    }

    /// Classify every node in the graph.
    ///
    /// A pure function of current store contents: recomputing without an
    /// intervening purchase returns an identical map.
    pub fn recompute_all(&self) -> StateMap {
        self.store
            .nodes()
            .map(|node| {
                let id = node.id();
                let state = if node.is_selected() {
                    NodeState::Selected
                } else if self.is_locked(id) {
                    NodeState::Locked
                } else {
                    NodeState::Available
                };
                (id, state)
            })
            .collect()
    }
}
