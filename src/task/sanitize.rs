//! HTML sanitisation of free-text input.
//!
//! Delegates to [`ammonia`] with an allowlist equivalent to an
//! inline-formatting-plus-blocks policy: structural markup survives,
//! everything else (scripts, event handlers, attributes, unknown tags)
//! is stripped before the text reaches storage.

use ammonia::Builder;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags preserved by the sanitisation policy.
const ALLOWED_TAGS: &[&str] = &[
    // Inline formatting
    "b", "i", "u", "s", "em", "strong", "sub", "sup", // Block elements
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote",
];

static POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(HashSet::new());
    builder
});

/// Strips unsafe markup from free-text input.
///
/// Blank input is returned unchanged; otherwise the cleaned output is
/// trimmed. The function is idempotent: sanitising already-sanitised
/// text yields the same text.
///
/// # Examples
///
/// ```rust
/// use tasktrail::task::sanitize::sanitize;
///
/// assert_eq!(sanitize("<b>Buy milk</b>"), "<b>Buy milk</b>");
/// assert_eq!(sanitize("<script>alert(1)</script>urgent"), "urgent");
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_owned();
    }
    POLICY.clean(input).to_string().trim().to_owned()
}
