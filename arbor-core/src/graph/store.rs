//! Graph Store
//!
//! The store holds the skill graph's topology (node set plus directed
//! prerequisite edges) and the per-node selection flag. An edge `from ->
//! to` means `from` must be purchased before `to` becomes available.
//!
//! # Design Decisions
//!
//! 1. Topology is write-once: nodes and edges can be added while a tree
//!    definition is being instantiated, but nothing is ever removed. The
//!    only mutation after that is flipping `selected` to true.
//!
//! 2. Both edge directions are materialized. `parents_of` drives the lock
//!    check on every state recompute, `children_of` drives the unlock
//!    signal after a purchase, and neither should have to scan the full
//!    edge set.
//!
//! 3. Nodes are kept in insertion order so state snapshots and iteration
//!    are deterministic across runs.

use std::collections::HashMap;

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::node::{Node, NodeId};
use crate::error::{GraphError, GraphResult};

/// Adjacency list for one node. Fan-in and fan-out stay small in practice
/// (the largest shipped tree tops out at four parents per node).
type Adjacency = SmallVec<[NodeId; 4]>;

/// Holds the immutable topology and the mutable selection flags.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// All nodes, in insertion order, indexed by id.
    nodes: IndexMap<NodeId, Node>,
    /// Incoming edges: node id -> its prerequisites.
    parents: HashMap<NodeId, Adjacency>,
    /// Outgoing edges: node id -> the nodes it gates.
    children: HashMap<NodeId, Adjacency>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// Fails with [`GraphError::DuplicateId`] if a node with the same id
    /// was already added.
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Add a directed prerequisite edge: `from` must be purchased before
    /// `to` unlocks.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either endpoint is
    /// missing. A repeated edge between the same pair is collapsed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }

        let parents = self.parents.entry(to).or_default();
        if parents.contains(&from) {
            return Ok(());
        }
        parents.push(from);
        self.children.entry(from).or_default().push(to);
        Ok(())
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Does a node with this id exist?
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Ids of the nodes with an edge into `id`. Empty for root nodes and
    /// for unknown ids.
    pub fn parents_of(&self, id: NodeId) -> &[NodeId] {
        self.parents.get(&id).map_or(&[], |v| v.as_slice())
    }

    /// Ids of the nodes gated behind `id`. Empty for leaves and for
    /// unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map_or(&[], |v| v.as_slice())
    }

    /// Mark a node as purchased.
    ///
    /// Idempotent. Returns whether the flag changed; an unknown id is a
    /// no-op returning false.
    pub fn mark_selected(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => node.mark_selected(),
            None => false,
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Verify that the prerequisite relation is acyclic.
    ///
    /// Runs Kahn's algorithm over the parent lists. If peeling roots never
    /// reaches every node, some node sits on a cycle and the graph must
    /// not be used; the first such node in insertion order is reported.
    pub fn verify_acyclic(&self) -> GraphResult<()> {
        let mut in_degree: HashMap<NodeId, usize> = HashMap::with_capacity(self.nodes.len());
        let mut queue: Vec<NodeId> = Vec::new();

        for &id in self.nodes.keys() {
            let degree = self.parents_of(id).len();
            in_degree.insert(id, degree);
            if degree == 0 {
                queue.push(id);
            }
        }

        while let Some(id) = queue.pop() {
            for &child in self.children_of(id) {
                if let Some(degree) = in_degree.get_mut(&child) {
                    *degree = degree.saturating_sub(1);
                    if *degree == 0 {
                        queue.push(child);
                    }
                }
            }
        }

        // Nodes still carrying in-degree after peeling sit on a cycle.
        match self.nodes.keys().find(|id| in_degree[*id] > 0) {
            Some(&culprit) => Err(GraphError::CycleDetected(culprit)),
            None => Ok(()),
        }
    }
}
