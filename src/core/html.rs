// src/core/html.rs
//
// Hand-rolled, case-insensitive HTML scanning. No DOM, no regex:
// the pages we read are table soup and local scanning inside known
// blocks is both faster and more tolerant of attribute noise.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<o …>…</c>` block at or after `from`.
/// Returns byte offsets of the whole block (opener through closer).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Find the next void/opening tag (e.g. `<img …>`) at or after `from`.
/// Returns offsets of the opener only, `>` inclusive.
pub fn next_open_tag_ci(s: &str, o: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let start = lc.get(from..)?.find(&ol)? + from;
    let end = s[start..].find('>')? + start + 1;
    Some((start, end))
}

/// Opening tag of a block, `<` through `>`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Attribute value from a single tag, case-insensitive on the name.
/// Tolerates single quotes, double quotes and unquoted values.
pub fn attr_ci(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = join!(to_lower(name).as_str(), "=");

    let mut search_from = 0usize;
    loop {
        let rel = lc[search_from..].find(&needle)?;
        let at = search_from + rel;

        // Must be a standalone attribute name, not a suffix of another.
        let boundary = at == 0
            || lc.as_bytes()[at - 1].is_ascii_whitespace()
            || lc.as_bytes()[at - 1] == b'"'
            || lc.as_bytes()[at - 1] == b'\'';
        if !boundary {
            search_from = at + needle.len();
            continue;
        }

        let val_start = at + needle.len();
        let rest = &tag[val_start..];
        let mut chars = rest.chars();
        return Some(match chars.next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                match body.find(q) {
                    Some(end) => body[..end].to_string(),
                    None => body.to_string(),
                }
            }
            Some(_) => rest
                .split(|c: char| c.is_ascii_whitespace() || c == '>')
                .next()
                .unwrap_or("")
                .to_string(),
            None => s!(),
        });
    }
}

/// Next `<a …>` opener. Guards against tags that merely start with
/// an 'a' (`<abbr>`, `<article>`).
pub fn next_anchor(s: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some((start, end)) = next_open_tag_ci(s, "<a", pos) {
        let after = s.as_bytes().get(start + 2).copied().unwrap_or(b'>');
        if after.is_ascii_whitespace() || after == b'>' {
            return Some((start, end));
        }
        pos = start + 2;
    }
    None
}
