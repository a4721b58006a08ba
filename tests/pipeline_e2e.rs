// tests/pipeline_e2e.rs
//
// Full scrape-to-graph pipeline against canned pages: two top
// players with two teammates each, one teammate shared between them.

use std::collections::HashMap;

use tm_graph::config::options::ScrapeOptions;
use tm_graph::core::net::{Fetch, FetchError};
use tm_graph::graph::TeamGraph;
use tm_graph::runner::build_graph;

struct StubFetch {
    pages: HashMap<String, String>,
}

impl Fetch for StubFetch {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or(FetchError::Status { code: 404, url: url.to_string() })
    }
}

fn profile_url(slug: &str, id: u32) -> String {
    format!("https://www.transfermarkt.us/{slug}/profil/spieler/{id}")
}

fn shared_matches_url(slug: &str, id: u32) -> String {
    format!("https://www.transfermarkt.us/{slug}/gemeinsameSpiele/spieler/{id}")
}

fn player_row(slug: &str, name: &str, id: u32, class: &str) -> String {
    format!(
        r#"<tr class="{class}"><td><img alt="{name}" src="p.jpg"></td>
        <td><a href="/{slug}/profil/spieler/{id}">{name}</a></td></tr>"#
    )
}

fn listing_page(players: &[(&str, &str, u32)]) -> String {
    let mut rows = String::new();
    for (i, (slug, name, id)) in players.iter().enumerate() {
        let class = if i % 2 == 0 { "odd" } else { "even" };
        rows.push_str(&player_row(slug, name, *id, class));
    }
    format!(r#"<table class="items"><tbody>{rows}</tbody></table>"#)
}

/// Shared-matches page: every data row is followed by two decorative
/// rows, matching the 1-in-3 stride of the live site.
fn teammate_page(players: &[(&str, &str, u32)]) -> String {
    let mut rows = String::new();
    for (slug, name, id) in players {
        rows.push_str(&format!(
            r#"<tr><td><img alt="{name}" src="p.jpg"></td>
            <td><a href="/{slug}/profil/spieler/{id}">{name}</a></td><td>12</td></tr>"#
        ));
        rows.push_str(r#"<tr><td colspan="3">crest strip</td></tr>"#);
        rows.push_str(r#"<tr><td colspan="3">per-competition split</td></tr>"#);
    }
    format!(
        r#"<table class="items"><thead><tr><th>Player</th></tr></thead>
        <tbody>{rows}</tbody></table>"#
    )
}

fn seeded_site() -> StubFetch {
    let mut pages = HashMap::new();
    pages.insert(
        "/start".to_string(),
        listing_page(&[("alice-alpha", "Alice Alpha", 1), ("bob-beta", "Bob Beta", 2)]),
    );
    // Alice played with Carol and Dana; Bob with Carol and Edda.
    pages.insert(
        shared_matches_url("alice-alpha", 1),
        teammate_page(&[("carol-gamma", "Carol Gamma", 3), ("dana-delta", "Dana Delta", 4)]),
    );
    pages.insert(
        shared_matches_url("bob-beta", 2),
        teammate_page(&[("carol-gamma", "Carol Gamma", 3), ("edda-epsilon", "Edda Epsilon", 5)]),
    );
    StubFetch { pages }
}

fn options() -> ScrapeOptions {
    ScrapeOptions {
        player_count: 2,
        teammates_per_player: 2,
        start_path: "/start".to_string(),
    }
}

fn edge_set(graph: &TeamGraph) -> Vec<(String, String)> {
    graph
        .edges()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn shared_teammate_is_merged_not_duplicated() {
    let mut fetch = seeded_site();
    let graph = build_graph(&mut fetch, &options(), None);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);

    let carol = profile_url("carol-gamma", 3);
    assert_eq!(graph.degree(&carol), 2);
    assert_eq!(graph.degree(&profile_url("alice-alpha", 1)), 2);
    assert_eq!(graph.degree(&profile_url("dana-delta", 4)), 1);

    // Alice and Bob share Carol but are not directly connected.
    let alice = profile_url("alice-alpha", 1);
    let bob = profile_url("bob-beta", 2);
    for (a, b) in graph.edges() {
        assert!(!(a == alice && b == bob) && !(a == bob && b == alice));
    }
}

#[test]
fn rebuilding_from_the_same_site_is_isomorphic() {
    let mut first_fetch = seeded_site();
    let mut second_fetch = seeded_site();
    let first = build_graph(&mut first_fetch, &options(), None);
    let second = build_graph(&mut second_fetch, &options(), None);

    let first_nodes: Vec<_> = first.nodes().map(|p| p.profile_id.clone()).collect();
    let second_nodes: Vec<_> = second.nodes().map(|p| p.profile_id.clone()).collect();
    assert_eq!(first_nodes, second_nodes);
    assert_eq!(edge_set(&first), edge_set(&second));
}

#[test]
fn listing_names_win_over_teammate_sightings() {
    // Carol appears only as a teammate, so her teammate-row name is
    // kept; Alice keeps her listing name even though teammate pages
    // could relist her under a variant.
    let mut fetch = seeded_site();
    let graph = build_graph(&mut fetch, &options(), None);

    let alice = graph.node(&profile_url("alice-alpha", 1)).unwrap();
    assert_eq!(alice.name, "Alice Alpha");
    let carol = graph.node(&profile_url("carol-gamma", 3)).unwrap();
    assert_eq!(carol.name, "Carol Gamma");
}

#[test]
fn missing_teammate_page_degrades_to_partial_graph() {
    let mut fetch = seeded_site();
    fetch.pages.remove(&shared_matches_url("bob-beta", 2));

    let graph = build_graph(&mut fetch, &options(), None);

    // Bob still lands as a node; only his edges are missing.
    assert!(graph.contains(&profile_url("bob-beta", 2)));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
}
