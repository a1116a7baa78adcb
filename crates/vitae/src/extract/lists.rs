//! List Normalizer — turns raw section text into clean ordered item lists.
//!
//! Two modes, both deterministic and pure:
//! - bullet mode: one item per non-empty line, leading markers stripped;
//! - skill mode: comma/pipe/line-break tokens, deduplicated in first-seen
//!   order (case-sensitive, post-trim).

use std::collections::HashSet;

/// Characters stripped from the front of every line or token before trimming.
const BULLET_MARKERS: &[char] = &['-', '*', ' ', '\t'];

/// Splits `text` into bullet items, one per non-empty line.
///
/// A non-blank input that yields zero items (e.g. a line of bare markers)
/// comes back as a single whole-blob item rather than being dropped.
pub fn bullet_items(text: &str) -> Vec<String> {
    let items: Vec<String> = text
        .lines()
        .map(|line| line.trim_start_matches(BULLET_MARKERS).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() && !text.trim().is_empty() {
        return vec![text.trim().to_string()];
    }
    items
}

/// Splits `text` into unique skill tokens on runs of commas, line breaks,
/// or pipes, preserving first-seen order.
pub fn skill_items(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for raw in text.split([',', '|', '\n', '\r']) {
        let token = raw.trim_start_matches(BULLET_MARKERS).trim();
        if token.is_empty() {
            continue;
        }
        if seen.insert(token.to_string()) {
            items.push(token.to_string());
        }
    }
    items
}
