//! Skill Graph
//!
//! This module implements the graph that backs a skill tree.
//!
//! # Overview
//!
//! The graph is a directed acyclic graph (DAG) where:
//!
//! - Nodes are purchasable entries with a cost and a monotonic
//!   `selected` flag
//! - Edges are prerequisite relations: an edge from A to B means A must
//!   be purchased before B unlocks
//!
//! The store owns topology and selection only. Whether a node is locked
//! is never stored; the engine layer derives it from the parents'
//! selection flags, so there is no stale lock state to invalidate.

mod node;
mod store;

pub use node::{Node, NodeId, NodeMeta};
pub use store::GraphStore;
