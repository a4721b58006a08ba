// src/runner.rs
//
// Scrape-to-graph pipeline. One shared session, strictly sequential:
// collect the top players, then walk each player's shared-matches
// pages and feed every (player, teammate) pair into the graph.
// Failures degrade to partial results; the pipeline always yields a
// valid, possibly incomplete graph.

use crate::config::options::ScrapeOptions;
use crate::core::net::Fetch;
use crate::graph::TeamGraph;
use crate::progress::Progress;
use crate::scrape::{collect_players, collect_teammates, LoopStop};
use crate::specs::teammates;

pub fn build_graph(
    fetch: &mut dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> TeamGraph {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Collecting top players…");
    }

    let collected = collect_players(fetch, opts.player_count, &opts.start_path);
    match &collected.stop {
        LoopStop::TargetReached => {}
        LoopStop::Exhausted => {
            logf!("Players: pagination exhausted at {}", collected.players.len());
        }
        LoopStop::Failed(e) => {
            loge!("Players: stopped early at {} ({e})", collected.players.len());
        }
    }
    let players = collected.players;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(players.len());
    }

    let mut graph = TeamGraph::new();
    for (i, player) in players.iter().enumerate() {
        // Seed the node first so the listing's record wins over any
        // later sighting of the same player as somebody's teammate.
        graph.upsert_node(player);

        let Some(url) = teammates::teammates_url(&player.profile_id) else {
            loge!("Teammates: no shared-matches URL for {}", player.profile_id);
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(i, &player.name);
            }
            continue;
        };

        let mates = collect_teammates(fetch, opts.teammates_per_player, &url);
        if let LoopStop::Failed(e) = &mates.stop {
            loge!(
                "Teammates: {} stopped early at {} ({e})",
                player.name,
                mates.players.len()
            );
        }
        for mate in &mates.players {
            graph.add_edge(player, mate);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &player.name);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    graph
}
