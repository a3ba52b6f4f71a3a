//! # Markdown Parsing
//!
//! Two independent stages turn page Markdown into typed pieces:
//!
//! 1. **Blocks** (`blocks`): the document is cut into blank-line separated
//!    blocks and each block is classified by its leading marker.
//! 2. **Inline** (`inline`): a block's cleaned text is tokenized into plain,
//!    bold, italic, code, link and image tokens.
//!
//! Neither stage builds HTML; that is the job of [`crate::convert`].

pub mod blocks;
pub mod inline;

pub use blocks::{Block, BlockKind, block_to_block_kind, markdown_to_blocks};
pub use inline::{TextToken, text_to_tokens};

/// Markdown that cannot be turned into tokens or nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("empty text cannot be tokenized")]
    EmptyText,
    #[error("invalid markdown syntax: unmatched `{delimiter}`")]
    UnmatchedDelimiter { delimiter: &'static str },
    #[error("invalid heading: {block:?}")]
    InvalidHeading { block: String },
    #[error("code block must start and end with ```: {block:?}")]
    MalformedCodeBlock { block: String },
    #[error("every quote line must start with `>`: {line:?}")]
    MalformedQuote { line: String },
}
