use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Attributes are matched whole, quoted values included, so a `>` or a
// `content=` inside a value never ends the tag or counts as the attribute.
static INLINE_META_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<meta\b((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*)\s*/?>([^<]*)</meta\s*>"#,
    )
    .expect("valid inline meta regex")
});

static ATTR_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s+([^\s"'>/=]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?"#)
        .expect("valid attribute regex")
});

/// Rewrite `<meta name="x">text</meta>` as `<meta name="x" content="text">`.
///
/// HTML5 tree builders treat `<meta>` as a void element, so inner text would
/// otherwise be hoisted into the body and lost to the meta entry. Elements
/// that already carry a `content` attribute, or only wrap whitespace, are
/// left alone.
pub fn inline_meta_text(html: &str) -> Cow<'_, str> {
    INLINE_META_TEXT_REGEX.replace_all(html, |caps: &Captures| {
        let attrs = &caps[1];
        let text = caps[2].trim();
        if text.is_empty() || has_content_attr(attrs) {
            return caps[0].to_string();
        }
        format!(r#"<meta{} content="{}">"#, attrs, text.replace('"', "&quot;"))
    })
}

fn has_content_attr(attrs: &str) -> bool {
    ATTR_NAME_REGEX
        .captures_iter(attrs)
        .any(|caps| caps[1].eq_ignore_ascii_case("content"))
}
