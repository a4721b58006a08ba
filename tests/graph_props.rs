// tests/graph_props.rs
//
// Graph builder invariants: node dedup, edge dedup in both
// directions, and build-order independence.

use tm_graph::graph::{Player, TeamGraph};

fn player(name: &str, slug: &str, id: u32) -> Player {
    Player::new(
        name,
        format!("https://www.transfermarkt.us/{slug}/profil/spieler/{id}"),
    )
}

#[test]
fn add_edge_twice_yields_one_edge() {
    let a = player("A", "a", 1);
    let b = player("B", "b", 2);

    let mut g = TeamGraph::new();
    assert!(g.add_edge(&a, &b));
    assert!(!g.add_edge(&a, &b));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn reversed_edge_is_a_duplicate() {
    let a = player("A", "a", 1);
    let b = player("B", "b", 2);

    let mut g = TeamGraph::new();
    g.add_edge(&a, &b);
    assert!(!g.add_edge(&b, &a));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.node_count(), 2);
}

#[test]
fn upsert_twice_keeps_first_record() {
    let first = player("Lionel Messi", "lionel-messi", 28003);
    let mut renamed = first.clone();
    renamed.name = String::from("L. Messi");

    let mut g = TeamGraph::new();
    assert!(g.upsert_node(&first));
    assert!(!g.upsert_node(&renamed));
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.node(&first.profile_id).unwrap().name, "Lionel Messi");
}

#[test]
fn build_order_does_not_change_the_graph() {
    let players: Vec<Player> = (0..6).map(|i| player(&format!("P{i}"), "p", i)).collect();
    let pairs = [(0, 1), (1, 2), (2, 3), (0, 4), (4, 5), (1, 5)];

    let mut forward = TeamGraph::new();
    for &(a, b) in &pairs {
        forward.add_edge(&players[a], &players[b]);
    }

    let mut backward = TeamGraph::new();
    for &(a, b) in pairs.iter().rev() {
        // also flip endpoints for good measure
        backward.add_edge(&players[b], &players[a]);
    }

    let f_nodes: Vec<_> = forward.nodes().map(|p| p.profile_id.clone()).collect();
    let b_nodes: Vec<_> = backward.nodes().map(|p| p.profile_id.clone()).collect();
    assert_eq!(f_nodes, b_nodes);

    let f_edges: Vec<_> = forward
        .edges()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    let b_edges: Vec<_> = backward
        .edges()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    assert_eq!(f_edges, b_edges);
}
