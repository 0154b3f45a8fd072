//! Whitespace and punctuation normalization for transcript text.

const TIGHT_PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

/// Trim, collapse whitespace runs to one space, and drop the space before
/// `, . ! ?`. Case and quoting are left alone.
pub fn clean(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ' ' && chars.peek().is_some_and(|next| TIGHT_PUNCTUATION.contains(next)) {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Whitespace-delimited tokens in order. Punctuation stays attached.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
