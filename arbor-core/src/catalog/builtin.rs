//! Built-in trees
//!
//! The three trees shipped with the game, one per god: cat, death, sun.
//! Node data is static; only the selection flags of an instantiated graph
//! ever change.

use super::{EdgeDef, NodeDef, TreeDef};

/// The cat god tree: a wide base of cheap stat nodes funneling into a
/// single avatar node at the top.
pub fn cat_tree() -> TreeDef {
    let mut nodes = Vec::with_capacity(26);
    let mut edges = Vec::with_capacity(25);

    // 17 small stat nodes feeding the mid tier.
    for i in 0..17u64 {
        let id = i + 1;
        nodes.push(NodeDef {
            id,
            cost: 10,
            level: 4,
            name: format!("Feline Instinct {}", i + 1),
            label: "+2%".to_string(),
            description: "+2% food production".to_string(),
        });
        edges.push(EdgeDef {
            from: id,
            to: 18 + i % 5,
        });
    }

    // 5 medium nodes feeding the major tier.
    for i in 0..5u64 {
        let id = 18 + i;
        nodes.push(NodeDef {
            id,
            cost: 50,
            level: 3,
            name: format!("Sacred Paw {}", i + 1),
            label: "Paw".to_string(),
            description: "+10% production & +5% luck".to_string(),
        });
        edges.push(EdgeDef {
            from: id,
            to: 23 + i % 3,
        });
    }

    // 3 major nodes gating the avatar.
    for i in 0..3u64 {
        let id = 23 + i;
        nodes.push(NodeDef {
            id,
            cost: 120,
            level: 2,
            name: format!("Nine Lives Ascension {}", i + 1),
            label: "Ascend".to_string(),
            description: "Game-changing divine blessing".to_string(),
        });
        edges.push(EdgeDef { from: id, to: 26 });
    }

    nodes.push(NodeDef {
        id: 26,
        cost: 250,
        level: 1,
        name: "Avatar of the Divine Cat".to_string(),
        label: "GOD".to_string(),
        description: "+50% global production & divine luck".to_string(),
    });

    TreeDef {
        name: "Divine Cat".to_string(),
        theme: "#f4c542".to_string(),
        nodes,
        edges,
    }
}

/// The death god tree: four nodes, two roots joining into one chain.
pub fn death_tree() -> TreeDef {
    TreeDef {
        name: "Death".to_string(),
        theme: "#888888".to_string(),
        nodes: vec![
            NodeDef {
                id: 1,
                cost: 30,
                level: 3,
                name: "Grave Pact".to_string(),
                label: "Grave\n(30)".to_string(),
                description: "Sacrifice villagers for power".to_string(),
            },
            NodeDef {
                id: 2,
                cost: 50,
                level: 3,
                name: "Soul Harvest".to_string(),
                label: "Harvest\n(50)".to_string(),
                description: "+1 power per death".to_string(),
            },
            NodeDef {
                id: 3,
                cost: 80,
                level: 2,
                name: "Undead Labor".to_string(),
                label: "Undead\n(80)".to_string(),
                description: "Dead villagers produce 50%".to_string(),
            },
            NodeDef {
                id: 4,
                cost: 150,
                level: 1,
                name: "Avatar of Death".to_string(),
                label: "Avatar\n(150)".to_string(),
                description: "Deaths generate faith".to_string(),
            },
        ],
        edges: vec![
            EdgeDef { from: 1, to: 3 },
            EdgeDef { from: 2, to: 3 },
            EdgeDef { from: 3, to: 4 },
        ],
    }
}

/// The sun god tree: same shape as the death tree, sunnier numbers.
pub fn sun_tree() -> TreeDef {
    TreeDef {
        name: "Sun".to_string(),
        theme: "#ffcc00".to_string(),
        nodes: vec![
            NodeDef {
                id: 1,
                cost: 20,
                level: 3,
                name: "Solar Prayer".to_string(),
                label: "Prayer\n(20)".to_string(),
                description: "+15% temple output".to_string(),
            },
            NodeDef {
                id: 2,
                cost: 45,
                level: 3,
                name: "Radiance".to_string(),
                label: "Radiance\n(45)".to_string(),
                description: "Faith grows 10% faster".to_string(),
            },
            NodeDef {
                id: 3,
                cost: 90,
                level: 2,
                name: "Divine Wrath".to_string(),
                label: "Wrath\n(90)".to_string(),
                description: "Click burst: +200% for 10s".to_string(),
            },
            NodeDef {
                id: 4,
                cost: 140,
                level: 1,
                name: "Sun Incarnate".to_string(),
                label: "Incarnate\n(140)".to_string(),
                description: "All bonuses doubled at noon".to_string(),
            },
        ],
        edges: vec![
            EdgeDef { from: 1, to: 3 },
            EdgeDef { from: 2, to: 3 },
            EdgeDef { from: 3, to: 4 },
        ],
    }
}

/// All built-in trees.
pub fn all_trees() -> Vec<TreeDef> {
    vec![cat_tree(), death_tree(), sun_tree()]
}

/// Look up a built-in tree by its selector key.
pub fn tree_by_key(key: &str) -> Option<TreeDef> {
    match key {
        "cat" => Some(cat_tree()),
        "dead" => Some(death_tree()),
        "sun" => Some(sun_tree()),
        _ => None,
    }
}
