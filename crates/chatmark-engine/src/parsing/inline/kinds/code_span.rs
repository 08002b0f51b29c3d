use std::sync::OnceLock;

use regex::Regex;

/// Inline code span type with owned delimiter constant.
///
/// Code spans are raw zones: their bodies skip every formatting pass.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character used for code spans.
    pub const TICK: char = '`';

    /// Matches a single-backtick span with no backtick or newline inside.
    pub fn regex() -> &'static Regex {
        static CODE_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_SPAN_REGEX.get_or_init(|| {
            let tick = regex::escape(&Self::TICK.to_string());
            Regex::new(&format!("{tick}([^{tick}\\n]+){tick}")).expect("Invalid code span regex")
        })
    }

    /// Marker left in escaped text in place of the span at `index`.
    pub fn marker(index: usize) -> String {
        format!("<@{index}>")
    }

    /// Matches markers produced by [`CodeSpan::marker`].
    pub fn marker_regex() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX.get_or_init(|| Regex::new(r"<@(\d+)>").expect("Invalid marker regex"))
    }
}
