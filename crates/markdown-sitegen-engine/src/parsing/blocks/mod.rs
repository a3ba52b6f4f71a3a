//! # Block Parsing
//!
//! Blocks are maximal runs of non-blank lines. They are found in two steps:
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines and
//!    every fragment is trimmed; empty fragments disappear.
//! 2. **Classification** (`classify`): each block is given a [`BlockKind`]
//!    from its first characters alone, using a fixed priority chain.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block-specific types owning their markers (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_kind`
//!
//! ## Key Invariants
//!
//! - Classification never looks at neighbouring blocks
//! - A block starting with `#` is a heading, whatever follows
//! - Blocks borrow from the source document and are never mutated

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_kind;
pub use segment::markdown_to_blocks;
pub use types::{Block, BlockKind};
