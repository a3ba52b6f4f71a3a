//! # Block Kinds
//!
//! Each block type owns the marker constants and prefix handling for its
//! syntax. Classification and conversion ask these types; they never
//! hardcode `#`, ```` ``` ````, `>`, `- ` or `1. ` themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
