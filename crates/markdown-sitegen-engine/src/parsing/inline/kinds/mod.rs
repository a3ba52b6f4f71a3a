//! # Inline Kinds
//!
//! Inline constructs and the delimiters they own.
//!
//! - **`Delimited`**: symmetric pairs (`**`, `_`, `` ` ``) and the token each produces
//! - **`LinkKind`**: `[text](url)` and `![alt](url)` with their match patterns
//!
//! The splitting code reads delimiters from here and never hardcodes them.

pub mod delimited;
pub mod link;

pub use delimited::Delimited;
pub use link::LinkKind;
