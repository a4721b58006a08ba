// src/display.rs
//
// Render-time label derivation. Never feeds back into graph identity;
// the profile URL stays the canonical key.

use crate::config::consts::PROFILE_SEGMENT;

/// Human-readable label from a canonical profile URL.
/// `…/lionel-messi/profil/…` → `Lionel Messi`. Anything without the
/// profile segment comes back unchanged.
pub fn display_name(profile_id: &str) -> String {
    let Some(at) = profile_id.find(PROFILE_SEGMENT) else {
        return s!(profile_id);
    };
    let head = &profile_id[..at];
    let slug = match head.rfind('/') {
        Some(i) => &head[i + 1..],
        None => head,
    };
    if slug.is_empty() {
        return s!(profile_id);
    }
    title_case(&slug.replace('-', " "))
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
