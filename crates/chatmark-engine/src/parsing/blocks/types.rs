/// A fenced code region lifted out of the input before block parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag following the opening fence, if any.
    pub language: Option<String>,
    /// Body with surrounding blank lines trimmed. Already HTML-escaped.
    pub body: String,
}

/// A structural unit of the parsed document.
///
/// Text-carrying variants hold markup that has already been escaped and
/// inline-formatted; they are wrapped verbatim at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##` or `###` heading.
    Heading {
        /// 1 to 3.
        level: u8,
        html: String,
    },
    /// A thematic break (`---`, `***`, `___`).
    Rule,
    /// A single-line `> ` quote.
    Quote { html: String },
    /// A run of consecutive list items.
    List { ordered: bool, items: Vec<String> },
    /// Consecutive text lines joined with single spaces.
    Paragraph { html: String },
    /// An opaque code region; see [`CodeBlock`].
    Code(CodeBlock),
}
