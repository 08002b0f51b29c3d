/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single-line: each `> ` line becomes its own quote block.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if `line` starts with the prefix and the rest is not blank.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        (!rest.trim().is_empty()).then_some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quote() {
        assert_eq!(BlockQuote::strip("> hello"), Some("hello"));
    }

    #[test]
    fn no_quote() {
        assert_eq!(BlockQuote::strip("hello"), None);
    }

    #[test]
    fn space_is_required() {
        assert_eq!(BlockQuote::strip(">hello"), None);
    }

    #[test]
    fn blank_quote_is_not_a_quote() {
        assert_eq!(BlockQuote::strip("> "), None);
        assert_eq!(BlockQuote::strip(">   "), None);
    }

    #[test]
    fn indented_marker_is_not_a_quote() {
        assert_eq!(BlockQuote::strip("  > hello"), None);
    }
}
