// src/specs/pagination.rs
//
// Pagination control shared by every paginated listing on the site.
// The "next" item carries a fixed marker class; its absence is the
// normal last-page signal, not an error.

use crate::config::consts::NEXT_PAGE_MARKER;
use crate::core::html::{attr_ci, next_anchor};
use super::row::absolutize;

/// Absolute URL of the next listing page, or `None` on the last page.
/// Fetch errors never come through here, so the caller can rely on
/// `None` meaning "pagination exhausted".
pub fn next_page_url(doc: &str) -> Option<String> {
    let at = doc.find(NEXT_PAGE_MARKER)?;
    let Some((a_s, a_e)) = next_anchor(doc, at) else {
        loge!("Pagination: next-page marker without an anchor");
        return None;
    };
    match attr_ci(&doc[a_s..a_e], "href") {
        Some(href) if !href.trim().is_empty() => Some(absolutize(href.trim())),
        _ => {
            loge!("Pagination: next-page anchor without an href");
            None
        }
    }
}
