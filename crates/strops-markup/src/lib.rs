//! Newline, tag, and HTML-entity helpers for strops.
//!
//! This crate provides the markup-facing transforms: newline-to-break
//! conversion, tag stripping, and entity escaping/unescaping. All of them
//! are total over arbitrary input; none of them parse HTML beyond the
//! patterns documented here.

use regex::Regex;
use std::sync::LazyLock;

/// One newline occurrence: the two-character sequences first so CRLF and
/// LFCR consume as a single occurrence, then the lone characters.
static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n\r|\r|\n").unwrap());

/// A generic markup tag: opening, closing, or self-closing, attributes
/// allowed. Nested angle brackets are not supported.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Replaces every newline occurrence with an HTML break tag.
///
/// `\r\n` and `\n\r` count as one newline each. The tag is the
/// self-closing `<br />` when `xhtml` is true, plain `<br>` otherwise.
pub fn nl2br(s: &str, xhtml: bool) -> String {
    let break_tag = if xhtml { "<br />" } else { "<br>" };
    NEWLINE.replace_all(s, break_tag).into_owned()
}

/// Removes every `<...>` tag from a string, keeping the text content and
/// whitespace between tags untouched.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Escapes `&`, `<`, and `>` as HTML entities.
///
/// The ampersand substitution runs first so the entities introduced for
/// `<` and `>` are not themselves re-escaped.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Decodes `&lt;`, `&gt;`, and `&amp;` back to their characters.
///
/// The ampersand decode runs last, mirroring [`escape_html`]'s
/// ampersand-first order, so a literal `&amp;lt;` round-trips instead of
/// collapsing to `<`.
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
}
