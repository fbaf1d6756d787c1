//! Graph Nodes
//!
//! This module defines the node types that live in the skill graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the skill graph.
///
/// Ids are assigned by the tree definition, not generated by the engine,
/// so they stay stable across sessions and can be referenced from outside
/// (renderers, click handlers, saved definitions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display metadata attached to a node.
///
/// The engine never inspects these fields. They exist so a renderer can
/// draw labels and tooltips without a side table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    /// Depth band used by hierarchical layouts (1 = top of the tree).
    pub level: u32,
    /// Full display name.
    pub name: String,
    /// Short label drawn on the node itself.
    pub label: String,
    /// Effect text shown in tooltips.
    pub description: String,
}

/// A purchasable node in the skill graph.
///
/// `selected` is the only mutable part of a node and it is monotonic: once
/// a node is purchased it stays purchased for the life of the session.
/// Lock state is not stored here; it is derived from the edges and the
/// selection flags of the node's parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    cost: u64,
    meta: NodeMeta,
    selected: bool,
}

impl Node {
    /// Create a node with empty display metadata.
    pub fn new(id: impl Into<NodeId>, cost: u64) -> Self {
        Self::with_meta(id, cost, NodeMeta::default())
    }

    /// Create a node carrying display metadata.
    pub fn with_meta(id: impl Into<NodeId>, cost: u64, meta: NodeMeta) -> Self {
        Self {
            id: id.into(),
            cost,
            meta,
            selected: false,
        }
    }

    /// Get the node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's price.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Get the display metadata.
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    /// Has this node been purchased?
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selected flag. Returns whether the flag changed, so the
    /// call stays idempotent.
    pub(crate) fn mark_selected(&mut self) -> bool {
        let changed = !self.selected;
        self.selected = true;
        changed
    }
}
