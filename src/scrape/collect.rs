// src/scrape/collect.rs
//
// The two collection loops. Both follow the same contract: fetch a
// page, extract records, append, stop at the target count (truncating
// any excess from the final page) or when pagination runs out.
// Retryable fetch errors get a bounded number of retries; terminal
// errors stop the loop and hand back whatever was accumulated.

use std::{thread, time::Duration};

use crate::config::consts::{MAX_RETRIES, REQUEST_PAUSE_MS};
use crate::core::net::{Fetch, FetchError};
use crate::graph::Player;
use crate::specs::{listing, pagination, teammates};

/// Why a collection loop stopped.
#[derive(Debug)]
pub enum LoopStop {
    TargetReached,
    /// Pagination ran out before the target. Expected terminal state,
    /// not an error: the short result is still valid.
    Exhausted,
    /// A fetch cycle failed terminally or exhausted its retries.
    Failed(FetchError),
}

/// Accumulated records plus the reason the loop ended.
#[derive(Debug)]
pub struct Collected {
    pub players: Vec<Player>,
    pub stop: LoopStop,
}

/// Gather up to `target` top-level players starting from the ranking
/// listing at `start_url`, following pagination as needed.
pub fn collect_players(fetch: &mut dyn Fetch, target: usize, start_url: &str) -> Collected {
    collect_paged(fetch, target, start_url, listing::parse_listing)
}

/// Gather up to `target` teammates from a player's shared-matches
/// pages, starting at `first_page_url`.
pub fn collect_teammates(fetch: &mut dyn Fetch, target: usize, first_page_url: &str) -> Collected {
    collect_paged(fetch, target, first_page_url, teammates::parse_teammates)
}

fn collect_paged(
    fetch: &mut dyn Fetch,
    target: usize,
    start_url: &str,
    parse: fn(&str) -> Vec<Player>,
) -> Collected {
    let mut acc: Vec<Player> = Vec::new();
    if target == 0 {
        return Collected { players: acc, stop: LoopStop::TargetReached };
    }

    let mut url = s!(start_url);
    loop {
        let doc = match fetch_with_retry(fetch, &url) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Collect: stopping at {} records ({e})", acc.len());
                return Collected { players: acc, stop: LoopStop::Failed(e) };
            }
        };

        let page = parse(&doc);
        logd!("Collect: {} records from {}", page.len(), url);
        acc.extend(page);

        if acc.len() >= target {
            acc.truncate(target);
            return Collected { players: acc, stop: LoopStop::TargetReached };
        }

        match pagination::next_page_url(&doc) {
            Some(next) => {
                pause();
                url = next;
            }
            None => return Collected { players: acc, stop: LoopStop::Exhausted },
        }
    }
}

fn fetch_with_retry(fetch: &mut dyn Fetch, url: &str) -> Result<String, FetchError> {
    let mut attempt = 0usize;
    loop {
        match fetch.get(url) {
            Ok(doc) => return Ok(doc),
            Err(e) if e.retryable() && attempt < MAX_RETRIES => {
                attempt += 1;
                logf!("Fetch: retry {attempt}/{MAX_RETRIES} for {url} ({e})");
                pause();
            }
            Err(e) => return Err(e),
        }
    }
}

fn pause() {
    // be polite
    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
}
