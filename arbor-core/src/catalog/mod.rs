//! Tree Catalog
//!
//! Tree definitions are the engine's input boundary. A [`TreeDef`] is a
//! plain description of one skill tree (node list, prerequisite edges, and
//! the theme color a renderer paints purchased nodes with) supplied either
//! from JSON or from the built-in set in [`builtin`].
//!
//! Definitions are untrusted: [`TreeDef::instantiate`] validates the graph
//! invariants (unique ids, known edge endpoints, acyclicity) and a
//! malformed definition never becomes a live [`GraphStore`].

mod builtin;

pub use builtin::{all_trees, cat_tree, death_tree, sun_tree, tree_by_key};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::{GraphStore, Node, NodeMeta};

/// One node as described by a tree definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDef {
    pub id: u64,
    pub cost: u64,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// A directed prerequisite edge: `from` must be purchased before `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDef {
    pub from: u64,
    pub to: u64,
}

/// Complete description of one skill tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDef {
    /// Display name of the tree.
    pub name: String,
    /// Theme color for purchased nodes, passed through to the renderer
    /// untouched (e.g. `#f4c542`).
    pub theme: String,
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

impl TreeDef {
    /// Parse a tree definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a validated [`GraphStore`] from this definition.
    pub fn instantiate(&self) -> Result<GraphStore, CatalogError> {
        let mut store = GraphStore::new();

        for def in &self.nodes {
            let meta = NodeMeta {
                level: def.level,
                name: def.name.clone(),
                label: def.label.clone(),
                description: def.description.clone(),
            };
            store.add_node(Node::with_meta(def.id, def.cost, meta))?;
        }
        for edge in &self.edges {
            store.add_edge(edge.from.into(), edge.to.into())?;
        }

        store.verify_acyclic()?;
        Ok(store)
    }
}

/// Errors raised while loading or instantiating a tree definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The definition is not valid JSON for a [`TreeDef`].
    #[error("malformed tree definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// The definition violates a graph invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
