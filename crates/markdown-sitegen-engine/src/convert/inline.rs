use crate::{
    html::{Attributes, HtmlNode, LeafNode},
    parsing::{SyntaxError, TextToken, text_to_tokens},
};

/// Lowers one token to a leaf node.
pub fn text_token_to_html_node(token: TextToken) -> HtmlNode {
    let leaf = match token {
        TextToken::Plain(text) => LeafNode::text(text),
        TextToken::Bold(text) => LeafNode::tagged("b", text),
        TextToken::Italic(text) => LeafNode::tagged("i", text),
        TextToken::Code(text) => LeafNode::tagged("code", text),
        TextToken::Link { text, url } => {
            LeafNode::tagged("a", text).with_props(Attributes::new().with("href", url))
        }
        TextToken::Image { alt, url } => LeafNode::tagged("img", "")
            .with_props(Attributes::new().with("src", url).with("alt", alt)),
    };
    leaf.into()
}

/// Tokenizes `text` and lowers every token, preserving order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, SyntaxError> {
    Ok(text_to_tokens(text)?
        .into_iter()
        .map(text_token_to_html_node)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain(TextToken::Plain("This is a text node".into()), "This is a text node")]
    #[case::bold(TextToken::Bold("b".into()), "<b>b</b>")]
    #[case::italic(TextToken::Italic("i".into()), "<i>i</i>")]
    #[case::code(TextToken::Code("c".into()), "<code>c</code>")]
    #[case::link(
        TextToken::Link { text: "boot".into(), url: "https://boot.dev".into() },
        r#"<a href="https://boot.dev">boot</a>"#
    )]
    #[case::link_with_empty_url(
        TextToken::Link { text: "nowhere".into(), url: String::new() },
        r#"<a href="">nowhere</a>"#
    )]
    #[case::image(
        TextToken::Image { alt: "cat".into(), url: "cat.png".into() },
        r#"<img src="cat.png" alt="cat"></img>"#
    )]
    fn lowers_token(#[case] token: TextToken, #[case] expected: &str) {
        assert_eq!(text_token_to_html_node(token).to_html().unwrap(), expected);
    }

    #[test]
    fn plain_leaf_has_no_tag() {
        let node = text_token_to_html_node(TextToken::Plain("x".into()));
        assert_eq!(node.tag(), None);
    }

    #[test]
    fn children_follow_token_order() {
        let children = text_to_children("a **b** c").unwrap();
        let tags: Vec<_> = children.iter().map(HtmlNode::tag).collect();
        assert_eq!(tags, vec![None, Some("b"), None]);
    }
}
