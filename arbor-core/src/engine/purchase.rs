//! Purchase Controller
//!
//! The controller is the sole state-changing entry point of the engine.
//! One click on a rendered node becomes one `attempt_purchase` call, which
//! either rejects with a typed error and touches nothing, or debits the
//! wallet and selects the node in a single step.
//!
//! # Guard Order
//!
//! The four guards run in a fixed order so rejections are deterministic:
//!
//! 1. unknown node
//! 2. already selected
//! 3. locked
//! 4. insufficient funds
//!
//! A node that is both already owned and unaffordable therefore reports
//! `AlreadySelected`, never `InsufficientFunds`.

use serde::Serialize;
use tracing::{debug, info};

use super::state::UnlockEngine;
use super::wallet::Wallet;
use crate::error::{PurchaseError, PurchaseResult};
use crate::graph::{GraphStore, NodeId};

/// Outcome of a successful purchase.
///
/// `unlocked` lists the direct children whose lock state flipped with this
/// purchase. Renderers use it to trigger unlock transitions without
/// diffing two full state snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// The node that was purchased.
    pub node: NodeId,
    /// What it cost.
    pub cost: u64,
    /// Wallet balance after the debit.
    pub balance: u64,
    /// Children that just became available.
    pub unlocked: Vec<NodeId>,
}

/// Validates and applies purchase attempts against a graph and a wallet.
#[derive(Debug)]
pub struct PurchaseController<'a> {
    store: &'a mut GraphStore,
    wallet: &'a mut Wallet,
}

impl<'a> PurchaseController<'a> {
    /// Create a controller borrowing the session's graph and wallet.
    pub fn new(store: &'a mut GraphStore, wallet: &'a mut Wallet) -> Self {
        Self { store, wallet }
    }

    /// Attempt to purchase a node.
    ///
    /// On success the wallet debit and the selection flag change happen
    /// together; there is no intermediate state a caller can observe. On
    /// any rejection neither the wallet nor the graph is mutated.
    pub fn attempt_purchase(&mut self, id: NodeId) -> PurchaseResult<Receipt> {
        let node = self
            .store
            .node(id)
            .ok_or(PurchaseError::UnknownNode(id))?;

        if node.is_selected() {
            debug!(node = %id, "purchase rejected: already owned");
            return Err(PurchaseError::AlreadySelected(id));
        }

        let cost = node.cost();
        if UnlockEngine::new(self.store).is_locked(id) {
            debug!(node = %id, "purchase rejected: prerequisites unmet");
            return Err(PurchaseError::Locked(id));
        }

        if !self.wallet.can_afford(cost) {
            debug!(
                node = %id,
                cost,
                balance = self.wallet.balance(),
                "purchase rejected: insufficient funds"
            );
            return Err(PurchaseError::InsufficientFunds {
                id,
                cost,
                balance: self.wallet.balance(),
            });
        }

        let balance = self.wallet.debit(cost);
        self.store.mark_selected(id);

        // Every direct child was locked a moment ago (this node was an
        // unselected parent), so the ones now purchasable are exactly the
        // children whose lock state flipped.
        let engine = UnlockEngine::new(self.store);
        let unlocked: Vec<NodeId> = self
            .store
            .children_of(id)
            .iter()
            .copied()
            .filter(|&child| !engine.is_selected(child) && !engine.is_locked(child))
            .collect();

        info!(node = %id, cost, balance, unlocked = unlocked.len(), "node purchased");

        Ok(Receipt {
            node: id,
            cost,
            balance,
            unlocked,
        })
    }
}
