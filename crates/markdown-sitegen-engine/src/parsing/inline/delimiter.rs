use crate::parsing::SyntaxError;

use super::{kinds::Delimited, types::TextToken};

/// Splits every `Plain` token on `kind`'s delimiter.
///
/// Pieces alternate outside/inside: even-indexed pieces stay `Plain`,
/// odd-indexed pieces become `kind`'s token. An even number of pieces means a
/// delimiter was left open. Empty pieces are dropped.
pub fn split_tokens_delimiter(
    tokens: Vec<TextToken>,
    kind: Delimited,
) -> Result<Vec<TextToken>, SyntaxError> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let text = match token {
            TextToken::Plain(text) => text,
            typed => {
                out.push(typed);
                continue;
            }
        };

        let pieces: Vec<&str> = text.split(kind.delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(SyntaxError::UnmatchedDelimiter {
                delimiter: kind.delimiter,
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextToken::Plain(piece.to_string()));
            } else {
                out.push(kind.token(piece));
            }
        }
    }
    Ok(out)
}
