// src/specs/row.rs
//
// Shared row shape: both the ranking listing and the shared-matches
// table present a player as a portrait image (name in the alt text)
// plus an anchor to the profile page.

use std::fmt;

use crate::config::consts::{BASE_URL, PROFILE_SEGMENT};
use crate::core::html::{attr_ci, next_anchor, next_open_tag_ci, opener};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::graph::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// No portrait image with a usable alt text in the row.
    MissingName,
    /// No anchor pointing at a profile page in the row.
    MissingLink,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingName => write!(f, "no name image"),
            RowError::MissingLink => write!(f, "no profile link"),
        }
    }
}

impl std::error::Error for RowError {}

/// Extract one player record from a `<tr>…</tr>` block.
pub fn player_from_row(tr: &str) -> Result<Player, RowError> {
    let name = row_name(tr).ok_or(RowError::MissingName)?;
    let href = profile_href(tr).ok_or(RowError::MissingLink)?;
    Ok(Player::new(name, absolutize(&href)))
}

/// Display name from the first image alt attribute that is not blank.
fn row_name(tr: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_open_tag_ci(tr, "<img", pos) {
        if let Some(alt) = attr_ci(&tr[s..e], "alt") {
            let clean = normalize_ws(&normalize_entities(&alt));
            if !clean.is_empty() {
                return Some(clean);
            }
        }
        pos = e;
    }
    None
}

/// The row's primary link: first anchor whose href targets a profile.
fn profile_href(tr: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_anchor(tr, pos) {
        if let Some(href) = attr_ci(&tr[s..e], "href") {
            if href.contains(PROFILE_SEGMENT) {
                return Some(href);
            }
        }
        pos = e;
    }
    None
}

/// Resolve a site-relative href against the site origin.
pub fn absolutize(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        s!(href)
    } else if href.starts_with('/') {
        join!(BASE_URL, href)
    } else {
        join!(BASE_URL, "/", href)
    }
}

/// Whether a `<tr>` block carries one of the expected styling classes.
pub fn has_row_class(tr: &str, classes: &[&str]) -> bool {
    match attr_ci(opener(tr), "class") {
        Some(attr) => attr
            .split_ascii_whitespace()
            .any(|c| classes.iter().any(|want| c.eq_ignore_ascii_case(want))),
        None => false,
    }
}
