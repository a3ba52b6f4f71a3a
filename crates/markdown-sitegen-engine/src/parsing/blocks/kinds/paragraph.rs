/// Paragraph block type.
///
/// Paragraphs have no markers; they are the fallback when no other kind
/// matches. Their lines are joined into one line before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    /// The block's lines joined with a single space.
    pub fn join_lines(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(Self::LINE_JOIN)
    }
}
