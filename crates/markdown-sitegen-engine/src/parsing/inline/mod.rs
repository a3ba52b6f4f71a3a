//! # Inline Parsing
//!
//! Turns the cleaned text of one block into an ordered list of
//! [`TextToken`]s.
//!
//! ## Pipeline
//!
//! Tokenization starts from a single `Plain` token and runs five stages in a
//! fixed order. Each stage only rewrites `Plain` tokens; typed tokens from
//! earlier stages pass through untouched.
//!
//! 1. `**` pairs → `Bold`
//! 2. `_` pairs → `Italic`
//! 3. `` ` `` pairs → `Code`
//! 4. `[text](url)` → `Link`
//! 5. `![alt](url)` → `Image`
//!
//! Because bold is split before italic before code, a delimiter inside an
//! already typed token is never split again. The flip side is that a lone `_`
//! inside a code span still reaches the italic stage first and is rejected.
//!
//! ## Modules
//!
//! - **`types`**: `TextToken`
//! - **`kinds`**: inline types owning their delimiters (`Delimited`, `LinkKind`)
//! - **`delimiter`**: paired-delimiter splitting (stages 1–3)
//! - **`links`**: link and image extraction (stages 4–5)
//! - **`parser`**: `text_to_tokens()` entry point

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use parser::text_to_tokens;
pub use types::TextToken;
