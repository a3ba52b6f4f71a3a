use std::borrow::Cow;

/// How text and attribute values are written during serialization.
///
/// Markdown pages are rendered [`Escaping::Verbatim`] by default: values are
/// copied into the output unchanged. [`Escaping::Html`] is an opt-in superset
/// that entity-encodes text content and double-quoted attribute values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    #[default]
    Verbatim,
    Html,
}

impl Escaping {
    pub fn text<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Verbatim => Cow::Borrowed(s),
            Escaping::Html => html_escape::encode_text(s),
        }
    }

    pub fn attribute<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Verbatim => Cow::Borrowed(s),
            Escaping::Html => html_escape::encode_double_quoted_attribute(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_leaves_markup_alone() {
        assert_eq!(Escaping::Verbatim.text("<b>&</b>"), "<b>&</b>");
    }

    #[test]
    fn html_encodes_text() {
        assert_eq!(Escaping::Html.text("a < b & c"), "a &lt; b &amp; c");
    }
}
