use crate::parsing::inline::types::TextToken;

/// An inline construct written as `<delim>text<delim>`.
#[derive(Debug, Clone, Copy)]
pub struct Delimited {
    pub delimiter: &'static str,
    wrap: fn(String) -> TextToken,
}

impl Delimited {
    pub const BOLD: Delimited = Delimited {
        delimiter: "**",
        wrap: TextToken::Bold,
    };
    pub const ITALIC: Delimited = Delimited {
        delimiter: "_",
        wrap: TextToken::Italic,
    };
    pub const CODE: Delimited = Delimited {
        delimiter: "`",
        wrap: TextToken::Code,
    };

    /// Wraps enclosed text in this construct's token.
    pub fn token(&self, text: &str) -> TextToken {
        (self.wrap)(text.to_string())
    }
}
