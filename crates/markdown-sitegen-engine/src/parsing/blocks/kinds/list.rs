/// `- item` list.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: char = '-';
    /// Marker plus the following space.
    pub const PREFIX_WIDTH: usize = 2;

    /// Item text of every line, with the marker prefix removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.lines().map(|line| drop_chars(line, Self::PREFIX_WIDTH))
    }
}

/// `1. item` list.
///
/// Every line loses a fixed three-character prefix, which assumes
/// single-digit ordinals: `10. ten` becomes ` ten`.
pub struct OrderedList;

impl OrderedList {
    pub const FIRST_MARKER: &'static str = "1. ";
    pub const PREFIX_WIDTH: usize = 3;

    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.lines().map(|line| drop_chars(line, Self::PREFIX_WIDTH))
    }
}

/// Drops the first `n` characters of `line` (not bytes).
fn drop_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
