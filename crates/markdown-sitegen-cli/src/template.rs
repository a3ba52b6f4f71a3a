//! Page template substitution.

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Replaces every `{{ Title }}` and `{{ Content }}` in `template`.
///
/// The title is substituted first, so a literal `{{ Content }}` inside the
/// title is still filled.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}
