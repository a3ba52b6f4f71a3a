use crate::{
    html::{HtmlNode, LeafNode, ParentNode},
    parsing::{
        SyntaxError,
        blocks::{
            Block, BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
    },
};

use super::inline::text_to_children;

/// Builds the structural node for one classified block.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, SyntaxError> {
    log::trace!("converting {:?} block", block.kind);
    let node = match block.kind {
        BlockKind::Paragraph => paragraph_to_html_node(block.text)?,
        BlockKind::Heading { .. } => heading_to_html_node(block.text)?,
        BlockKind::Code => code_to_html_node(block.text)?,
        BlockKind::Quote => quote_to_html_node(block.text)?,
        BlockKind::UnorderedList => list_to_html_node("ul", UnorderedList::items(block.text))?,
        BlockKind::OrderedList => list_to_html_node("ol", OrderedList::items(block.text))?,
    };
    Ok(node.into())
}

fn paragraph_to_html_node(block: &str) -> Result<ParentNode, SyntaxError> {
    let text = Paragraph::join_lines(block);
    Ok(ParentNode::new("p", text_to_children(&text)?))
}

fn heading_to_html_node(block: &str) -> Result<ParentNode, SyntaxError> {
    let (level, text) = Heading::split(block).ok_or_else(|| SyntaxError::InvalidHeading {
        block: block.to_string(),
    })?;
    Ok(ParentNode::new(&format!("h{level}"), text_to_children(text)?))
}

/// `<pre><code>…</code></pre>` around the raw interior; no inline parsing.
fn code_to_html_node(block: &str) -> Result<ParentNode, SyntaxError> {
    let interior = CodeFence::interior(block).ok_or_else(|| SyntaxError::MalformedCodeBlock {
        block: block.to_string(),
    })?;
    let code = ParentNode::new("code", vec![LeafNode::text(interior).into()]);
    Ok(ParentNode::new("pre", vec![code.into()]))
}

fn quote_to_html_node(block: &str) -> Result<ParentNode, SyntaxError> {
    let lines = block
        .lines()
        .map(|line| {
            BlockQuote::strip_line(line).ok_or_else(|| SyntaxError::MalformedQuote {
                line: line.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let text = lines.join(Paragraph::LINE_JOIN);
    Ok(ParentNode::new("blockquote", text_to_children(&text)?))
}

fn list_to_html_node<'a>(
    tag: &str,
    items: impl Iterator<Item = &'a str>,
) -> Result<ParentNode, SyntaxError> {
    let items = items
        .map(|item| -> Result<HtmlNode, SyntaxError> {
            Ok(ParentNode::new("li", text_to_children(item)?).into())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(block: &str) -> String {
        block_to_html_node(&Block::new(block))
            .unwrap()
            .to_html()
            .unwrap()
    }

    fn convert_err(block: &str) -> SyntaxError {
        block_to_html_node(&Block::new(block)).unwrap_err()
    }

    #[rstest]
    #[case::h1("# Title", "<h1>Title</h1>")]
    #[case::h3("### Sub **bold**", "<h3>Sub <b>bold</b></h3>")]
    #[case::h6("###### Six", "<h6>Six</h6>")]
    #[case::no_space("#Heading", "<h1>Heading</h1>")]
    fn headings(#[case] block: &str, #[case] expected: &str) {
        assert_eq!(render(block), expected);
    }

    #[test]
    fn bare_hashes_are_invalid_heading() {
        assert_eq!(
            convert_err("##"),
            SyntaxError::InvalidHeading { block: "##".into() }
        );
    }

    #[test]
    fn heading_level_seven_is_invalid() {
        assert!(matches!(
            convert_err("####### too deep"),
            SyntaxError::InvalidHeading { .. }
        ));
    }

    #[test]
    fn heading_keeps_following_lines() {
        assert_eq!(render("# Heading\nText here"), "<h1>Heading\nText here</h1>");
    }

    #[test]
    fn paragraph_lines_joined() {
        assert_eq!(render("one\ntwo"), "<p>one two</p>");
    }

    #[test]
    fn code_block_is_not_inline_parsed() {
        let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            render(md),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn code_block_info_string_dropped() {
        assert_eq!(
            render("```rust\nlet x = 1;\n```"),
            "<pre><code>let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn unterminated_code_block() {
        assert!(matches!(
            convert_err("```\nno end"),
            SyntaxError::MalformedCodeBlock { .. }
        ));
    }

    #[test]
    fn quote_lines_joined() {
        assert_eq!(
            render("> Line 1\n> Line 2"),
            "<blockquote>Line 1 Line 2</blockquote>"
        );
    }

    #[test]
    fn quote_with_inline_markup() {
        assert_eq!(
            render("> \"I am in fact a _Hobbit_\"\n>\n> -- J.R.R. Tolkien"),
            "<blockquote>\"I am in fact a <i>Hobbit</i>\"  -- J.R.R. Tolkien</blockquote>"
        );
    }

    #[test]
    fn quote_line_without_marker_is_malformed() {
        assert_eq!(
            convert_err("> one\ntwo"),
            SyntaxError::MalformedQuote { line: "two".into() }
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render("- This is a list\n- with **items**"),
            "<ul><li>This is a list</li><li>with <b>items</b></li></ul>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. first\n2. second _one_"),
            "<ol><li>first</li><li>second <i>one</i></li></ol>"
        );
    }

    #[test]
    fn ordered_list_two_digit_ordinal_is_misstripped() {
        let block = (1..=10)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        let html = render(&block);
        assert!(html.ends_with("<li>item</li><li> item</li></ol>"), "{html}");
    }

    #[test]
    fn empty_list_item_is_rejected() {
        assert_eq!(convert_err("- a\n-"), SyntaxError::EmptyText);
    }
}
