//! Greedy word-wrap over a fixed character width.

/// Wraps `text` to `width` characters, collapsing internal whitespace runs
/// to single spaces first.
///
/// Breaks fall at the last space at-or-before the limit; a single token
/// longer than the limit is placed on its own line unsplit. Blank input
/// yields no lines.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
