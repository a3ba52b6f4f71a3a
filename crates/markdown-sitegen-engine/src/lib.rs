pub mod convert;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use convert::{
    ConvertError, TitleError, extract_title, markdown_to_html, markdown_to_html_node,
    markdown_to_html_with,
};
pub use html::{Attributes, ContractError, Escaping, HtmlNode, LeafNode, ParentNode};
pub use parsing::{Block, BlockKind, SyntaxError, TextToken};
