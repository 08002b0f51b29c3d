use std::sync::OnceLock;

use regex::Regex;

/// Link types with owned patterns: `[label](url)` and bare `http(s)://` runs.
///
/// Patterns run over already-escaped text, so a raw `"`, `'`, `<` or `>` can
/// only come from markup emitted by earlier passes. A URL may contain `&` only
/// as `&amp;`: user-typed quotes and angle brackets arrive as entities and end
/// the URL there, and every href stays inside its attribute.
pub struct Link;

impl Link {
    /// Safety attributes set on every emitted anchor.
    pub const REL: &'static str = "noopener noreferrer";

    /// URL body over escaped text: no whitespace, `)`, markup or entity except `&amp;`.
    const URL_BODY: &'static str = r#"https?://(?:[^\s&<>)"']|&amp;)+"#;

    /// `[label](http(s)://...)`.
    pub fn markdown_regex() -> &'static Regex {
        static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKDOWN_LINK_REGEX.get_or_init(|| {
            Regex::new(&format!(r"\[([^\]]+)\]\(({})\)", Self::URL_BODY))
                .expect("Invalid markdown link regex")
        })
    }

    /// A URL preceded by start of text, whitespace, `(`, `,`, `>` or an escaped `>`.
    pub fn bare_url_regex() -> &'static Regex {
        static BARE_URL_REGEX: OnceLock<Regex> = OnceLock::new();
        BARE_URL_REGEX.get_or_init(|| {
            Regex::new(&format!(r"(^|[\s(,>]|&gt;)({})", Self::URL_BODY))
                .expect("Invalid URL regex")
        })
    }

    /// An anchor element already present in the text.
    pub fn anchor_regex() -> &'static Regex {
        static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
        ANCHOR_REGEX
            .get_or_init(|| Regex::new(r"(?s)<a\s[^>]*>.*?</a>").expect("Invalid anchor regex"))
    }

    /// Builds an anchor; `href` and `label` must already be escaped.
    pub fn anchor(href: &str, label: &str, new_tab: bool) -> String {
        if new_tab {
            format!(
                r#"<a href="{href}" target="_blank" rel="{}">{label}</a>"#,
                Self::REL
            )
        } else {
            format!(r#"<a href="{href}" rel="{}">{label}</a>"#, Self::REL)
        }
    }
}
