/// Blockquote block with its `>` prefix.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the leading `>` markers and surrounding whitespace from a line.
    ///
    /// Returns `None` if the line does not start with `>`. Nested markers
    /// (`>> text`) are flattened.
    pub fn strip_line(line: &str) -> Option<&str> {
        if !line.starts_with(Self::PREFIX) {
            return None;
        }
        Some(line.trim_start_matches(Self::PREFIX).trim())
    }
}
