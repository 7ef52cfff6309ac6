//! Plain-text cleanup for feed titles and summaries.
//!
//! This is a naive tag stripper, not an HTML parser: anything between `<`
//! and the next `>` is dropped, and only a fixed set of entities is decoded.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Decoded in this order; `&amp;` comes before `&lt;` so `&amp;lt;` ends up as `<`.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Appended to summaries cut at the length limit.
pub const ELLIPSIS: &str = "...";

/// Strip tags, decode the common entities and collapse whitespace.
pub fn strip(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut clean = TAG_PATTERN.replace_all(text, "").into_owned();
    for (entity, replacement) in ENTITIES {
        clean = clean.replace(entity, replacement);
    }

    WHITESPACE_PATTERN.replace_all(&clean, " ").trim().to_string()
}

/// Cut `text` to `max_chars` characters, appending [`ELLIPSIS`] if anything was dropped.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// [`strip`] followed by [`truncate`].
pub fn summarize(text: &str, max_chars: usize) -> String {
    truncate(&strip(text), max_chars)
}
