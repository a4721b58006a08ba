// src/specs/listing.rs
//
// Ranking listing: one page of top players. Data rows alternate
// between the `odd` and `even` styling classes; everything else in
// the table is chrome (headers, ad rows, spacers).

use crate::config::consts::{ROW_CLASS_EVEN, ROW_CLASS_ODD};
use crate::core::html::next_tag_block_ci;
use crate::graph::Player;
use super::row::{self, has_row_class};

/// Extract the player records of one listing page, in page order.
/// A malformed data row is logged and skipped; the page keeps parsing.
pub fn parse_listing(doc: &str) -> Vec<Player> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        if !has_row_class(tr, &[ROW_CLASS_ODD, ROW_CLASS_EVEN]) {
            continue;
        }
        match row::player_from_row(tr) {
            Ok(p) => out.push(p),
            Err(e) => loge!("Listing: skipping malformed data row ({e})"),
        }
    }
    out
}
