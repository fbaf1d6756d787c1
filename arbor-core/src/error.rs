//! Error types for graph construction and purchase attempts.
//!
//! Construction errors (`GraphError`) mean the tree definition itself is
//! malformed and must never reach a live session. Purchase errors
//! (`PurchaseError`) are ordinary gameplay outcomes: the UI layer surfaces
//! them as feedback or a silent no-op, and the engine state is untouched.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building or validating a skill graph.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id was already added.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// An edge endpoint does not exist in the node set.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),

    /// The prerequisite relation contains a cycle through this node.
    #[error("prerequisite cycle detected at node {0}")]
    CycleDetected(NodeId),
}

/// Errors raised by a purchase attempt.
///
/// The guards are checked in declaration order, so a node that trips
/// several of them always reports the first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// No node with this id exists in the active graph.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),

    /// The node was already purchased.
    #[error("node {0} is already owned")]
    AlreadySelected(NodeId),

    /// At least one prerequisite of the node is not yet purchased.
    #[error("node {0} is locked behind unmet prerequisites")]
    Locked(NodeId),

    /// The wallet cannot cover the node's cost.
    #[error("insufficient funds for node {id}: cost {cost}, balance {balance}")]
    InsufficientFunds {
        id: NodeId,
        cost: u64,
        balance: u64,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
pub type PurchaseResult<T> = Result<T, PurchaseError>;
