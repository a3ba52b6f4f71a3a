use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block from its leading characters.
///
/// Rules are tried in a fixed order and the first match wins: heading, code
/// fence, quote, unordered list, ordered list, then paragraph. A block that
/// starts with `#` is therefore always a heading.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        BlockKind::Heading { level }
    } else if block.starts_with(CodeFence::FENCE) {
        BlockKind::Code
    } else if block.starts_with(BlockQuote::PREFIX) {
        BlockKind::Quote
    } else if block.starts_with(UnorderedList::MARKER) {
        BlockKind::UnorderedList
    } else if block.starts_with(OrderedList::FIRST_MARKER) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
