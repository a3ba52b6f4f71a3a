//! # Markdown → HTML conversion
//!
//! Assembles the node tree for a whole document: every block becomes one
//! child of a root `<div>`, in document order.
//!
//! - **`inline`**: `TextToken` → leaf node
//! - **`block`**: classified block → structural node (`p`, `h1`–`h6`, `pre`,
//!   `blockquote`, `ul`, `ol`)
//! - **`title`**: page title lookup for templates
//!
//! Conversion is all-or-nothing: the first error discards the partial tree.

pub mod block;
pub mod inline;
pub mod title;

pub use block::block_to_html_node;
pub use inline::text_token_to_html_node;
pub use title::{TitleError, extract_title};

use crate::{
    html::{ContractError, Escaping, HtmlNode, ParentNode},
    parsing::{Block, SyntaxError},
};

/// Tag of the root node wrapping a converted document.
pub const DOCUMENT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Builds the node tree for a whole document.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = Block::parse_all(markdown);
    log::debug!("converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(DOCUMENT_TAG, children).into())
}

/// Converts and serializes a document with values written verbatim.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_html_with(markdown, Escaping::Verbatim)
}

pub fn markdown_to_html_with(markdown: &str, escaping: Escaping) -> Result<String, ConvertError> {
    let node = markdown_to_html_node(markdown)?;
    Ok(node.render(escaping)?)
}
