use crate::parsing::blocks::{kinds::Paragraph, markdown_to_blocks};

/// Prefix a block must start with, after line joining, to be the page title.
pub const TITLE_PREFIX: &str = "# ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("no h1")]
    NoH1,
}

/// Returns the text of the first level-1 heading block.
///
/// Only the start of each block is checked: a block whose first line is
/// plain text does not qualify even if a later line is `# Title`. All leading
/// `#` characters and surrounding whitespace are removed from the result.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(Paragraph::join_lines)
        .find(|joined| joined.starts_with(TITLE_PREFIX))
        .map(|joined| joined.trim_start_matches('#').trim().to_string())
        .ok_or(TitleError::NoH1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("# Simple Title", "Simple Title")]
    #[case::first_of_many("# First Title\n\nSome text\n\n# Second Title", "First Title")]
    #[case::later_block("Some introductory text\n\n# Actual Title\n\nMore text", "Actual Title")]
    #[case::text_in_same_block(
        "# Title followed by text\nThis is still part of the block.",
        "Title followed by text This is still part of the block."
    )]
    #[case::extra_spaces("#   Title with spaces  ", "Title with spaces")]
    #[case::after_h2("## Subtitle\n\n# Main Title", "Main Title")]
    #[case::trailing_hash("# Title #", "Title #")]
    #[case::leading_newline("\n# T", "T")]
    #[case::indented("  # T", "T")]
    fn finds_title(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case::paragraphs_only("Just paragraphs.\n\nAnother paragraph.")]
    #[case::empty("")]
    #[case::only_spaces("   \n\n   ")]
    #[case::h2_only("## Subtitle")]
    #[case::no_space_after_hash("#NoSpace")]
    #[case::not_first_line("First line\n# Title")]
    fn no_title(#[case] markdown: &str) {
        let err = extract_title(markdown).unwrap_err();
        assert_eq!(err, TitleError::NoH1);
        assert_eq!(err.to_string(), "no h1");
    }
}
