// src/graph.rs
//
// In-memory teammate network. Nodes are keyed by canonical profile URL;
// edges are undirected and deduplicated. The graph only ever grows during
// a run, then becomes read-only input to export and rendering.

use std::collections::{BTreeMap, BTreeSet};

/// One individual as seen on the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Display name as scraped (image alt text).
    pub name: String,
    /// Canonical profile URL. Node key; two records with the same id
    /// are the same person.
    pub profile_id: String,
}

impl Player {
    pub fn new(name: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self { name: name.into(), profile_id: profile_id.into() }
    }
}

/// Ordered containers keep iteration deterministic: building from the
/// same pairs in any order yields the same node and edge sets.
#[derive(Clone, Debug, Default)]
pub struct TeamGraph {
    nodes: BTreeMap<String, Player>,
    edges: BTreeSet<(String, String)>,
}

impl TeamGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `player` keyed by profile id if absent. An existing node
    /// is left untouched (first record wins). Returns whether a node
    /// was inserted.
    pub fn upsert_node(&mut self, player: &Player) -> bool {
        if self.nodes.contains_key(&player.profile_id) {
            return false;
        }
        self.nodes.insert(player.profile_id.clone(), player.clone());
        true
    }

    /// Undirected edge between `a` and `b`. Upserts both endpoints,
    /// then inserts the unordered pair once; a duplicate in either
    /// direction is a no-op, as is a self-edge. Returns whether an
    /// edge was inserted.
    pub fn add_edge(&mut self, a: &Player, b: &Player) -> bool {
        if a.profile_id == b.profile_id {
            return false;
        }
        self.upsert_node(a);
        self.upsert_node(b);
        self.edges.insert(Self::ordered(&a.profile_id, &b.profile_id))
    }

    fn ordered(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (s!(a), s!(b))
        } else {
            (s!(b), s!(a))
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, profile_id: &str) -> bool {
        self.nodes.contains_key(profile_id)
    }

    pub fn node(&self, profile_id: &str) -> Option<&Player> {
        self.nodes.get(profile_id)
    }

    /// Nodes in key order.
    pub fn nodes(&self) -> impl Iterator<Item = &Player> {
        self.nodes.values()
    }

    /// Edges as ordered (low, high) key pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Count of edges incident to a node. Drives visual emphasis at
    /// render time; linear scan is fine at batch-job scale.
    pub fn degree(&self, profile_id: &str) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| a == profile_id || b == profile_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_edges_are_rejected() {
        let mut g = TeamGraph::new();
        let a = Player::new("A", "https://x/a/profil/spieler/1");
        assert!(!g.add_edge(&a, &a));
        assert_eq!(g.edge_count(), 0);
        // endpoint still lands as a node
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn degree_counts_incident_edges() {
        let mut g = TeamGraph::new();
        let a = Player::new("A", "id:a");
        let b = Player::new("B", "id:b");
        let c = Player::new("C", "id:c");
        g.add_edge(&a, &b);
        g.add_edge(&a, &c);
        assert_eq!(g.degree("id:a"), 2);
        assert_eq!(g.degree("id:b"), 1);
        assert_eq!(g.degree("id:missing"), 0);
    }
}
