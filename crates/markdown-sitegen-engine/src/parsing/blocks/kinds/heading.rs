/// ATX-style heading (`# Title` … `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Number of leading `#` characters, or `None` if the block has none.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.bytes().take_while(|&b| b == Self::MARKER).count();
        (level > 0).then_some(level)
    }

    /// Splits a heading block into its level and text.
    ///
    /// The text is everything after the markers, minus one separating space.
    /// The space is optional: `#Heading` splits to `(1, "Heading")` rather
    /// than losing its first character.
    /// Returns `None` when nothing follows the markers or the level is above
    /// [`Heading::MAX_LEVEL`].
    pub fn split(block: &str) -> Option<(usize, &str)> {
        let level = Self::level(block)?;
        if level + 1 > block.len() || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &block[level..];
        Some((level, rest.strip_prefix(' ').unwrap_or(rest)))
    }
}
