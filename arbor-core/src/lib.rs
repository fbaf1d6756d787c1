//! Arbor Core
//!
//! This crate provides the core engine for the Arbor skill-tree framework.
//! It implements:
//!
//! - The skill graph (purchasable nodes plus directed prerequisite edges)
//! - Unlock state derivation (selected / locked / available)
//! - Purchase validation against a session wallet
//! - The session lifecycle and the built-in tree catalog
//!
//! Rendering, layout, tooltips, and unlock animations live outside this
//! crate: a renderer consumes the state snapshots and purchase receipts
//! the engine emits and owns everything visual.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: topology storage and the per-node selection flag
//! - `engine`: lock derivation, the wallet, and the purchase controller
//! - `session`: one caller-owned browsing instance per chosen tree
//! - `catalog`: tree definitions, from JSON or the built-in set
//!
//! # Example
//!
//! ```rust
//! use arbor_core::{catalog, NodeId, Session};
//!
//! let tree = catalog::death_tree();
//! let mut session = Session::start_default(&tree).unwrap();
//!
//! // Node 3 is gated behind both roots.
//! assert!(session.attempt_purchase(NodeId::new(3)).is_err());
//!
//! session.attempt_purchase(NodeId::new(1)).unwrap();
//! session.attempt_purchase(NodeId::new(2)).unwrap();
//! let receipt = session.attempt_purchase(NodeId::new(3)).unwrap();
//!
//! assert_eq!(receipt.balance, 40);
//! assert_eq!(receipt.unlocked, vec![NodeId::new(4)]);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod graph;
pub mod session;

pub use catalog::TreeDef;
pub use engine::{NodeState, PurchaseController, Receipt, StateMap, UnlockEngine, Wallet};
pub use error::{GraphError, PurchaseError};
pub use graph::{GraphStore, Node, NodeId, NodeMeta};
pub use session::{Session, SessionSummary};
