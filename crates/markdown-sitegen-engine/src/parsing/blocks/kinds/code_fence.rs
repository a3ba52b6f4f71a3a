/// Fenced code block delimited by ```` ``` ```` lines.
///
/// Code blocks are raw zones: their interior is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Returns the text between the opening fence line and the closing fence.
    ///
    /// The opening line (fence plus optional info string such as `python`) is
    /// skipped up to and including its newline; the newline before the
    /// closing fence is kept. A block on a single line yields the text between
    /// the fences. `None` if the block does not both start and end with a
    /// fence.
    pub fn interior(block: &str) -> Option<&str> {
        let fence = Self::FENCE.len();
        if block.len() < fence * 2 || !block.starts_with(Self::FENCE) || !block.ends_with(Self::FENCE)
        {
            return None;
        }
        let inner = &block[fence..block.len() - fence];
        Some(match inner.split_once('\n') {
            Some((_info, body)) => body,
            None => inner,
        })
    }
}
