// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use tm_graph::config::options::{ExportFormat, ExportOptions};
use tm_graph::csv::parse_rows;
use tm_graph::export::export_graph;
use tm_graph::graph::{Player, TeamGraph};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tm_graph_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_graph() -> TeamGraph {
    let a = Player::new("Alice Alpha", "https://x/alice-alpha/profil/spieler/1");
    let b = Player::new("Bob Beta", "https://x/bob-beta/profil/spieler/2");
    let c = Player::new("Carol, the Gamma", "https://x/carol-gamma/profil/spieler/3");

    let mut g = TeamGraph::new();
    g.add_edge(&a, &b);
    g.add_edge(&a, &c);
    g
}

#[test]
fn csv_export_writes_nodes_with_degrees_and_edges() {
    let opts = ExportOptions {
        format: ExportFormat::Csv,
        out_dir: tmp_dir("csv"),
        include_headers: true,
    };

    let written = export_graph(&opts, &sample_graph()).unwrap();
    assert_eq!(written.len(), 2);

    let nodes_text = fs::read_to_string(&written[0]).unwrap();
    let rows = parse_rows(&nodes_text, ',');
    assert_eq!(rows[0], vec!["Name", "Profile", "Degree"]);
    // 3 nodes after the header, key-ordered
    assert_eq!(rows.len(), 4);

    let alice = rows
        .iter()
        .find(|r| r[0] == "Alice Alpha")
        .expect("alice row");
    assert_eq!(alice[2], "2");

    // comma inside a name survives the round trip
    let carol = rows
        .iter()
        .find(|r| r[0] == "Carol, the Gamma")
        .expect("carol row");
    assert_eq!(carol[2], "1");

    let edges_text = fs::read_to_string(&written[1]).unwrap();
    let edge_rows = parse_rows(&edges_text, ',');
    assert_eq!(edge_rows[0], vec!["Player A", "Player B"]);
    assert_eq!(edge_rows.len(), 3);
}

#[test]
fn tsv_export_uses_tab_delimiter_and_extension() {
    let opts = ExportOptions {
        format: ExportFormat::Tsv,
        out_dir: tmp_dir("tsv"),
        include_headers: false,
    };

    let written = export_graph(&opts, &sample_graph()).unwrap();
    assert!(written[0].to_string_lossy().ends_with("players.tsv"));
    assert!(written[1].to_string_lossy().ends_with("teammates.tsv"));

    let text = fs::read_to_string(&written[0]).unwrap();
    assert!(text.contains('\t'));
    // no header row
    assert_eq!(parse_rows(&text, '\t').len(), 3);
}
