//! Skill Graph Engine
//!
//! This module layers gameplay semantics over the graph:
//!
//! - `state`: derives the Selected / Locked / Available partition
//! - `wallet`: the session currency
//! - `purchase`: the single validated mutation entry point
//!
//! Everything here is synchronous and runs to completion per call. One
//! click on a node maps to one completed `attempt_purchase`, so no
//! interleaving between a purchase and a state read is possible.

mod purchase;
mod state;
mod wallet;

pub use purchase::{PurchaseController, Receipt};
pub use state::{NodeState, StateMap, UnlockEngine};
pub use wallet::{Wallet, DEFAULT_BALANCE};
