use std::ops::Range;

use super::{kinds::LinkKind, types::TextToken};

/// One `[label](url)` or `![label](url)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'t> {
    /// Byte range of the whole construct in the scanned text.
    pub range: Range<usize>,
    pub label: &'t str,
    pub url: &'t str,
}

/// Finds every `kind` construct in `text`, left to right, without overlaps.
pub fn find_links(text: &str, kind: LinkKind) -> Vec<LinkMatch<'_>> {
    let mut found = Vec::new();
    let mut resume = 0;

    for (start, _) in text.match_indices(kind.opener()) {
        if start < resume || !kind.admits(text, start) {
            continue;
        }
        let Some(caps) = kind.pattern().captures(&text[start..]) else {
            continue;
        };
        let end = start + caps[0].len();
        found.push(LinkMatch {
            range: start..end,
            label: caps.get(1).map_or("", |m| m.as_str()),
            url: caps.get(2).map_or("", |m| m.as_str()),
        });
        resume = end;
    }
    found
}

/// `(alt, url)` pairs of every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    find_links(text, LinkKind::Image)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// `(text, url)` pairs of every link in `text`, images excluded.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text, LinkKind::Link)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

pub fn split_tokens_link(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_tokens(tokens, LinkKind::Link)
}

pub fn split_tokens_image(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_tokens(tokens, LinkKind::Image)
}

/// Replaces `kind` constructs inside `Plain` tokens with typed tokens.
///
/// Text between matches is kept as `Plain` only when non-empty, and empty
/// `Plain` tokens are dropped outright.
fn split_tokens(tokens: Vec<TextToken>, kind: LinkKind) -> Vec<TextToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let text = match token {
            TextToken::Plain(text) => text,
            typed => {
                out.push(typed);
                continue;
            }
        };
        if text.is_empty() {
            continue;
        }

        let mut last = 0;
        for m in find_links(&text, kind) {
            if m.range.start > last {
                out.push(TextToken::Plain(text[last..m.range.start].to_string()));
            }
            out.push(kind.token(m.label, m.url));
            last = m.range.end;
        }
        if last < text.len() {
            out.push(TextToken::Plain(text[last..].to_string()));
        }
    }
    out
}
