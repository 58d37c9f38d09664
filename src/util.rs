/// Collapses every whitespace run into a single space and trims both ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Byte offset of the `chars`-th character, or `text.len()` past the end.
pub(crate) fn char_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// Byte position of the first space at or after character index `limit`.
/// The search runs to the end of `text`.
pub(crate) fn find_next_space(text: &str, limit: usize) -> Option<usize> {
    let start = char_offset(text, limit);
    text[start..].find(' ').map(|pos| start + pos)
}

/// Byte position of the last space within the first `limit` characters.
pub(crate) fn find_previous_space(text: &str, limit: usize) -> Option<usize> {
    text[..char_offset(text, limit)].rfind(' ')
}
