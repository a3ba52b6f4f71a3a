use super::{classify::block_to_block_kind, segment::markdown_to_blocks};

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other marker matches.
    Paragraph,
    /// `#`-prefixed heading.
    Heading {
        /// Number of leading `#` characters. Only 1–6 render.
        level: usize,
    },
    /// A ```` ``` ```` fenced code block.
    Code,
    /// A `>` block quote.
    Quote,
    /// A `-` list.
    UnorderedList,
    /// A list starting with `1. `.
    OrderedList,
}

/// A classified block borrowing its text from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed block text, lines separated by `\n`.
    pub text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    /// Classifies `text` once and keeps the result alongside it.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: block_to_block_kind(text),
        }
    }

    /// Segments and classifies a whole document, preserving block order.
    pub fn parse_all(document: &'a str) -> Vec<Block<'a>> {
        markdown_to_blocks(document)
            .into_iter()
            .map(Block::new)
            .collect()
    }

    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }
}
