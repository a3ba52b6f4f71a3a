/// Separator between blocks: a line break immediately followed by another.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks in document order.
///
/// Any run of blank lines acts as a single separator, and blocks made only of
/// whitespace are dropped.
pub fn markdown_to_blocks(document: &str) -> Vec<&str> {
    let blocks: Vec<&str> = document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    log::trace!("segmented document into {} blocks", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn markdown_to_blocks_mixed_document() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[rstest]
    #[case::empty("", vec![])]
    #[case::single_block("This is a single paragraph", vec!["This is a single paragraph"])]
    #[case::two_blocks("a\n\nb", vec!["a", "b"])]
    #[case::three_blocks(
        "First paragraph\n\nSecond paragraph\n\nThird paragraph",
        vec!["First paragraph", "Second paragraph", "Third paragraph"]
    )]
    #[case::single_newlines_stay_together(
        "Line one\nLine two\nLine three",
        vec!["Line one\nLine two\nLine three"]
    )]
    #[case::extra_newlines_collapse(
        "First block\n\n\n\nSecond block\n\n\nThird block",
        vec!["First block", "Second block", "Third block"]
    )]
    #[case::leading_and_trailing_newlines(
        "\n\nFirst block\n\nSecond block\n\n",
        vec!["First block", "Second block"]
    )]
    #[case::whitespace_only_block_dropped(
        "Real block\n\n  \n\nAnother block",
        vec!["Real block", "Another block"]
    )]
    #[case::trailing_whitespace_trimmed(
        "First block  \n\nSecond block\t\n\nThird block",
        vec!["First block", "Second block", "Third block"]
    )]
    #[case::mixed_content(
        "# Heading\nText here\n\n* List item 1\n* List item 2\n\nParagraph",
        vec!["# Heading\nText here", "* List item 1\n* List item 2", "Paragraph"]
    )]
    fn segments(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(markdown_to_blocks(input), expected);
    }
}
