//! Tree Sessions
//!
//! A session is one active tree-browsing instance: the instantiated graph,
//! the wallet, and the theme color, owned together by the caller. Picking
//! a tree in the UI starts a session; backing out or confirming ends it.
//!
//! # Lifecycle
//!
//! There are no process-wide singletons and never two live sessions for
//! the same player. Selecting a different tree means dropping this session
//! and starting a new one, which discards all selection state. Both exits
//! consume the session, so a confirmed or abandoned session cannot be
//! purchased from afterwards.

use serde::Serialize;
use tracing::info;

use crate::catalog::{CatalogError, TreeDef};
use crate::engine::{NodeState, PurchaseController, Receipt, StateMap, UnlockEngine, Wallet};
use crate::error::PurchaseResult;
use crate::graph::{GraphStore, NodeId};

/// One active tree-browsing instance.
#[derive(Debug)]
pub struct Session {
    tree: String,
    theme: String,
    graph: GraphStore,
    wallet: Wallet,
    starting_balance: u64,
}

impl Session {
    /// Start a session for a tree definition.
    ///
    /// Instantiates and validates the graph; a malformed definition fails
    /// here and no session exists.
    pub fn start(def: &TreeDef, wallet: Wallet) -> Result<Self, CatalogError> {
        let graph = def.instantiate()?;
        info!(
            tree = %def.name,
            nodes = graph.node_count(),
            balance = wallet.balance(),
            "session started"
        );
        Ok(Self {
            tree: def.name.clone(),
            theme: def.theme.clone(),
            graph,
            wallet,
            starting_balance: wallet.balance(),
        })
    }

    /// Start a session with the default wallet.
    pub fn start_default(def: &TreeDef) -> Result<Self, CatalogError> {
        Self::start(def, Wallet::default())
    }

    /// The tree's display name.
    pub fn tree(&self) -> &str {
        &self.tree
    }

    /// Theme color for purchased nodes, opaque to the engine.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The underlying graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Current wallet balance.
    pub fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    /// Classify a single node.
    pub fn state_of(&self, id: NodeId) -> Option<NodeState> {
        UnlockEngine::new(&self.graph).state_of(id)
    }

    /// Snapshot every node's state for the renderer.
    pub fn states(&self) -> StateMap {
        UnlockEngine::new(&self.graph).recompute_all()
    }

    /// Attempt to purchase a node. One UI click maps to one call.
    pub fn attempt_purchase(&mut self, id: NodeId) -> PurchaseResult<Receipt> {
        PurchaseController::new(&mut self.graph, &mut self.wallet).attempt_purchase(id)
    }

    /// Confirm the session, keeping its outcome.
    pub fn confirm(self) -> SessionSummary {
        let selected: Vec<NodeId> = self
            .graph
            .nodes()
            .filter(|n| n.is_selected())
            .map(|n| n.id())
            .collect();
        let summary = SessionSummary {
            tree: self.tree,
            selected,
            balance: self.wallet.balance(),
            spent: self.starting_balance - self.wallet.balance(),
        };
        info!(
            tree = %summary.tree,
            purchased = summary.selected.len(),
            spent = summary.spent,
            "session confirmed"
        );
        summary
    }

    /// Abandon the session, discarding all purchases.
    pub fn abandon(self) {
        info!(tree = %self.tree, "session abandoned");
    }
}

/// What a confirmed session hands back to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub tree: String,
    /// Ids of the purchased nodes, in graph order.
    pub selected: Vec<NodeId>,
    /// Remaining wallet balance.
    pub balance: u64,
    /// Total spent over the session.
    pub spent: u64,
}
