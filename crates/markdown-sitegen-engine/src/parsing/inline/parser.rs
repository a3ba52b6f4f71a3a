use crate::parsing::SyntaxError;

use super::{
    delimiter::split_tokens_delimiter,
    kinds::Delimited,
    links::{split_tokens_image, split_tokens_link},
    types::TextToken,
};

/// Tokenizes a block's text into [`TextToken`]s.
///
/// # Errors
/// - [`SyntaxError::EmptyText`] for `""`
/// - [`SyntaxError::UnmatchedDelimiter`] when `**`, `_` or `` ` `` is left open
pub fn text_to_tokens(text: &str) -> Result<Vec<TextToken>, SyntaxError> {
    if text.is_empty() {
        return Err(SyntaxError::EmptyText);
    }

    let tokens = vec![TextToken::Plain(text.to_string())];
    let tokens = split_tokens_delimiter(tokens, Delimited::BOLD)?;
    let tokens = split_tokens_delimiter(tokens, Delimited::ITALIC)?;
    let tokens = split_tokens_delimiter(tokens, Delimited::CODE)?;
    let tokens = split_tokens_link(tokens);
    Ok(split_tokens_image(tokens))
}
