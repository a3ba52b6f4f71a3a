/// One inline unit of a block's text.
///
/// Only `Link` and `Image` carry a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextToken {
    /// Text outside any inline construct.
    Plain(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// `` `code` ``
    Code(String),
    /// `[text](url)`. The url may be empty but is never absent.
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextToken {
    /// Display text, or alt text for images.
    pub fn text(&self) -> &str {
        match self {
            TextToken::Plain(text)
            | TextToken::Bold(text)
            | TextToken::Italic(text)
            | TextToken::Code(text) => text,
            TextToken::Link { text, .. } => text,
            TextToken::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextToken::Link { url, .. } | TextToken::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tokens() {
        assert_eq!(
            TextToken::Bold("This is a text node".into()),
            TextToken::Bold("This is a text node".into())
        );
    }

    #[test]
    fn different_text_is_unequal() {
        assert_ne!(
            TextToken::Bold("This text node".into()),
            TextToken::Bold("This is a text node".into())
        );
    }

    #[test]
    fn different_kind_is_unequal() {
        assert_ne!(
            TextToken::Plain("same".into()),
            TextToken::Italic("same".into())
        );
    }

    #[test]
    fn different_url_is_unequal() {
        let a = TextToken::Link {
            text: "t".into(),
            url: "https://www.gogle.com/".into(),
        };
        let b = TextToken::Link {
            text: "t".into(),
            url: "https://www.google.com/".into(),
        };
        assert_ne!(a, b);
    }

    #[test]
    fn only_links_and_images_have_urls() {
        assert_eq!(TextToken::Code("x".into()).url(), None);
        let img = TextToken::Image {
            alt: "cat".into(),
            url: "cat.png".into(),
        };
        assert_eq!(img.url(), Some("cat.png"));
        assert_eq!(img.text(), "cat");
    }
}
