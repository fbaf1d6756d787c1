//! Integration Tests for the Skill Graph Engine
//!
//! These tests drive full purchase flows the way a UI would: start a
//! session, click nodes, read back states and receipts.

use arbor_core::catalog::{self, EdgeDef, NodeDef, TreeDef};
use arbor_core::{NodeId, NodeState, PurchaseError, Session, Wallet};

fn id(raw: u64) -> NodeId {
    NodeId::new(raw)
}

/// A minimal two-tier tree: root A at cost 10 gating child B at cost 50.
fn root_and_child() -> TreeDef {
    TreeDef {
        name: "test".to_string(),
        theme: "#33c3f0".to_string(),
        nodes: vec![
            NodeDef {
                id: 1,
                cost: 10,
                level: 2,
                name: "A".to_string(),
                label: String::new(),
                description: String::new(),
            },
            NodeDef {
                id: 2,
                cost: 50,
                level: 1,
                name: "B".to_string(),
                label: String::new(),
                description: String::new(),
            },
        ],
        edges: vec![EdgeDef { from: 1, to: 2 }],
    }
}

/// Buying bottom-up: the child rejects while its parent is unowned, then
/// both purchases drain the wallet to exactly zero.
#[test]
fn child_unlocks_only_after_parent_is_bought() {
    let mut session = Session::start(&root_and_child(), Wallet::new(60)).unwrap();

    let err = session.attempt_purchase(id(2)).unwrap_err();
    assert_eq!(err, PurchaseError::Locked(id(2)));
    assert_eq!(session.balance(), 60);

    let receipt = session.attempt_purchase(id(1)).unwrap();
    assert_eq!(receipt.balance, 50);
    assert_eq!(receipt.unlocked, vec![id(2)]);

    let receipt = session.attempt_purchase(id(2)).unwrap();
    assert_eq!(receipt.balance, 0);
    assert_eq!(session.state_of(id(2)), Some(NodeState::Selected));
}

/// An unaffordable root rejects and the wallet is untouched.
#[test]
fn unaffordable_root_leaves_the_session_unchanged() {
    let mut session = Session::start(&root_and_child(), Wallet::new(5)).unwrap();

    let err = session.attempt_purchase(id(1)).unwrap_err();
    assert_eq!(
        err,
        PurchaseError::InsufficientFunds {
            id: id(1),
            cost: 10,
            balance: 5
        }
    );
    assert_eq!(session.balance(), 5);
    assert_eq!(session.state_of(id(1)), Some(NodeState::Available));
}

/// A node with two parents stays locked until both are purchased.
#[test]
fn multi_parent_node_needs_every_prerequisite() {
    let def = TreeDef {
        name: "and-gate".to_string(),
        theme: "#fff".to_string(),
        nodes: (1..=3)
            .map(|n| NodeDef {
                id: n,
                cost: 10,
                level: 1,
                name: String::new(),
                label: String::new(),
                description: String::new(),
            })
            .collect(),
        edges: vec![EdgeDef { from: 1, to: 3 }, EdgeDef { from: 2, to: 3 }],
    };
    let mut session = Session::start(&def, Wallet::new(100)).unwrap();

    assert_eq!(
        session.attempt_purchase(id(3)).unwrap_err(),
        PurchaseError::Locked(id(3))
    );

    // Still locked with only one parent owned.
    let receipt = session.attempt_purchase(id(1)).unwrap();
    assert!(receipt.unlocked.is_empty());
    assert_eq!(
        session.attempt_purchase(id(3)).unwrap_err(),
        PurchaseError::Locked(id(3))
    );

    let receipt = session.attempt_purchase(id(2)).unwrap();
    assert_eq!(receipt.unlocked, vec![id(3)]);
    assert!(session.attempt_purchase(id(3)).is_ok());
}

/// Clicking a node that does not exist mutates nothing anywhere.
#[test]
fn unknown_node_is_rejected_without_side_effects() {
    let mut session = Session::start(&root_and_child(), Wallet::new(60)).unwrap();
    let before = session.states();

    let err = session.attempt_purchase(id(99)).unwrap_err();
    assert_eq!(err, PurchaseError::UnknownNode(id(99)));
    assert_eq!(session.balance(), 60);
    assert_eq!(session.states(), before);
}

/// Re-clicking an owned node reports AlreadySelected even when the wallet
/// could no longer afford it.
#[test]
fn owned_node_reports_already_selected_before_funds() {
    let mut session = Session::start(&root_and_child(), Wallet::new(10)).unwrap();
    session.attempt_purchase(id(1)).unwrap();
    assert_eq!(session.balance(), 0);

    let err = session.attempt_purchase(id(1)).unwrap_err();
    assert_eq!(err, PurchaseError::AlreadySelected(id(1)));
    assert_eq!(session.balance(), 0);
}

/// Playing the death tree top to bottom at the default wallet: the avatar
/// stays out of reach, exactly as in the shipped game data.
#[test]
fn death_tree_playthrough_at_default_wallet() {
    let mut session = Session::start_default(&catalog::tree_by_key("dead").unwrap()).unwrap();
    assert_eq!(session.theme(), "#888888");

    session.attempt_purchase(id(1)).unwrap(); // Grave Pact, 30
    session.attempt_purchase(id(2)).unwrap(); // Soul Harvest, 50
    let receipt = session.attempt_purchase(id(3)).unwrap(); // Undead Labor, 80
    assert_eq!(receipt.balance, 40);
    assert_eq!(receipt.unlocked, vec![id(4)]);

    // Avatar of Death costs 150; 40 remains.
    let err = session.attempt_purchase(id(4)).unwrap_err();
    assert_eq!(
        err,
        PurchaseError::InsufficientFunds {
            id: id(4),
            cost: 150,
            balance: 40
        }
    );

    let summary = session.confirm();
    assert_eq!(summary.selected, vec![id(1), id(2), id(3)]);
    assert_eq!(summary.spent, 160);
    assert_eq!(summary.balance, 40);
}

/// Walking the cat tree's cheap tier unlocks mid-tier nodes one fan-in at
/// a time, with every snapshot staying a clean three-way partition.
#[test]
fn cat_tree_tier_progression() {
    let mut session = Session::start(&catalog::cat_tree(), Wallet::new(10_000)).unwrap();

    // Node 18's prerequisites are the small nodes 1, 6, 11, 16.
    for n in [1u64, 6, 11] {
        let receipt = session.attempt_purchase(id(n)).unwrap();
        assert!(receipt.unlocked.is_empty());
    }
    let receipt = session.attempt_purchase(id(16)).unwrap();
    assert_eq!(receipt.unlocked, vec![id(18)]);

    let states = session.states();
    assert_eq!(states.len(), 26);
    assert_eq!(states[&id(18)], NodeState::Available);
    assert_eq!(states[&id(19)], NodeState::Locked);
    assert_eq!(states[&id(26)], NodeState::Locked);
}

/// The state snapshot a renderer receives is identical when recomputed
/// without an intervening purchase.
#[test]
fn snapshots_are_idempotent_between_clicks() {
    let mut session = Session::start_default(&catalog::sun_tree()).unwrap();
    assert_eq!(session.states(), session.states());

    session.attempt_purchase(id(1)).unwrap();
    assert_eq!(session.states(), session.states());
}
