//! Plain text transforms applied before the attachment is built.

use std::sync::LazyLock;

use regex::Regex;

/// Characters Slack accepts inside a link target.
const URI_CHARS: &str = r"[\w\-.~:/?#\[\]@!$&'*+,;=%]";

static HTML_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"<a\b[^>]*?\bhref=['"](?P<link>{URI_CHARS}+?)['"][^>]*>(?P<label>.+?)</a>"#
    ))
    .expect("HTML link pattern is valid")
});

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"\[(?P<label>[^\[\]]*?)\]\((?P<link>(?:https?://|mailto:)(?:{URI_CHARS}|\({URI_CHARS}*\))+?)(?:\s+['"][^'"]*['"])?\)"#
    ))
    .expect("Markdown link pattern is valid")
});

/// Replaces every literal `\n` (backslash, `n`) with a newline.
#[must_use]
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Rewrites HTML anchors and Markdown links into Slack's `<url|text>` form.
///
/// A Markdown target must start with `http://`, `https://` or `mailto:`. It
/// may contain balanced parentheses one level deep, so
/// `[x](https://en.wikipedia.org/wiki/Foo_(bar))` keeps the `(bar)`.
/// Whitespace ends the target; anything after it must be a quoted title,
/// which is dropped. Bare URLs are left alone; Slack links those itself.
#[must_use]
pub fn format_links(text: &str) -> String {
    let text = HTML_LINK.replace_all(text, "<${link}|${label}>");
    MARKDOWN_LINK
        .replace_all(&text, "<${link}|${label}>")
        .into_owned()
}

/// Prefixes a bare channel name with `#`.
///
/// Returns `None` for a missing or empty channel so no override is sent.
#[must_use]
pub fn normalize_channel(channel: Option<&str>) -> Option<String> {
    let channel = channel.filter(|c| !c.is_empty())?;
    if channel.starts_with('#') || channel.starts_with('@') {
        Some(channel.to_string())
    } else {
        Some(format!("#{channel}"))
    }
}
