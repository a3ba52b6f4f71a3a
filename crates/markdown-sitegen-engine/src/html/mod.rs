//! # HTML Node Tree
//!
//! A small, generic tag/attribute/children tree that sits between the parsed
//! Markdown and the final HTML string.
//!
//! ## Node Kinds
//!
//! - **`LeafNode`**: a value with an optional tag (untagged leaves render as raw text)
//! - **`ParentNode`**: a tag wrapping one or more owned children
//!
//! Both carry an optional, insertion-ordered [`Attributes`] list. The tree is
//! built bottom-up and every child has exactly one owner, so it cannot contain
//! cycles.
//!
//! ## Serialization
//!
//! [`HtmlNode::to_html`] renders values verbatim. Construction mistakes
//! (a leaf without a value, a parent without a tag or children) surface as a
//! [`ContractError`] at render time rather than being repaired.

pub mod attributes;
pub mod escaping;
pub mod node;

pub use attributes::Attributes;
pub use escaping::Escaping;
pub use node::{HtmlNode, LeafNode, ParentNode};

/// A node tree that violates its construction contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("All leaf nodes must have a value")]
    LeafWithoutValue,
    #[error("Parent node must have a tag")]
    ParentWithoutTag,
    #[error("Parent node <{tag}> must have at least one child")]
    ParentWithoutChildren { tag: String },
}
