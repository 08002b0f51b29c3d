//! # Escaping
//!
//! The single injection defense of the crate. Every literal span of user text
//! must pass through [`escape`] exactly once on its way to the output: the
//! function is not idempotent, so a second pass turns `&amp;` into `&amp;amp;`.

use std::borrow::Cow;

/// Rewrites `&`, `<`, `>`, `"` and `'` to HTML entities.
///
/// The result is safe both as element text and inside a double- or
/// single-quoted attribute value. Borrows the input when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">&</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn escapes_single_quote() {
        let out = escape("it's");
        assert!(!out.contains('\''));
        assert!(out.starts_with("it&"));
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn escaping_twice_double_escapes() {
        let once = escape("&");
        let twice = escape(&once);
        assert_eq!(once, "&amp;");
        assert_eq!(twice, "&amp;amp;");
        assert_ne!(once, twice);
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape(""), "");
    }
}
