use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::TextToken;

/// The two bracket-and-paren constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `[text](url)`, not preceded by `!`.
    Link,
    /// `![alt](url)`
    Image,
}

impl LinkKind {
    pub const IMAGE_MARKER: u8 = b'!';

    /// Literal text every match starts with.
    pub fn opener(self) -> &'static str {
        match self {
            LinkKind::Link => "[",
            LinkKind::Image => "![",
        }
    }

    /// Pattern anchored at a candidate opener. Label and url are matched
    /// lazily and never span a line break.
    pub fn pattern(self) -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        match self {
            LinkKind::Link => LINK
                .get_or_init(|| Regex::new(r"^\[(.*?)\]\((.*?)\)").expect("Invalid link regex")),
            LinkKind::Image => IMAGE
                .get_or_init(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").expect("Invalid image regex")),
        }
    }

    /// Whether a match may start at byte `start` of `text`.
    ///
    /// A link directly after `!` belongs to an image.
    pub fn admits(self, text: &str, start: usize) -> bool {
        match self {
            LinkKind::Link => start == 0 || text.as_bytes()[start - 1] != Self::IMAGE_MARKER,
            LinkKind::Image => true,
        }
    }

    pub fn token(self, label: &str, url: &str) -> TextToken {
        match self {
            LinkKind::Link => TextToken::Link {
                text: label.to_string(),
                url: url.to_string(),
            },
            LinkKind::Image => TextToken::Image {
                alt: label.to_string(),
                url: url.to_string(),
            },
        }
    }
}
