use super::kinds::{BlockQuote, Heading, ListMarker, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text fields borrow the raw,
/// still unescaped line with its marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    Quote(&'a str),
    BulletItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    Text(&'a str),
}

impl LineClass<'_> {
    /// Whether this line opens a block, ending any paragraph in progress.
    pub fn starts_block(&self) -> bool {
        !matches!(self, LineClass::Blank | LineClass::Text(_))
    }
}

/// A line-prefix predicate. Returns the classification when the line matches.
pub type LinePredicate = fn(&str) -> Option<LineClass<'_>>;

/// Block-start predicates in priority order; the first match wins.
pub const BLOCK_START_PREDICATES: [LinePredicate; 7] = [
    heading_3,
    heading_2,
    heading_1,
    rule,
    quote,
    bullet_item,
    ordered_item,
];

/// Classifies `line` by the first matching predicate, falling back to blank or text.
pub fn classify(line: &str) -> LineClass<'_> {
    BLOCK_START_PREDICATES
        .iter()
        .find_map(|predicate| predicate(line))
        .unwrap_or_else(|| {
            if line.trim().is_empty() {
                LineClass::Blank
            } else {
                LineClass::Text(line)
            }
        })
}

fn heading(line: &str, level: u8) -> Option<LineClass<'_>> {
    Heading::strip(line, level).map(|text| LineClass::Heading { level, text })
}

pub fn heading_3(line: &str) -> Option<LineClass<'_>> {
    heading(line, 3)
}

pub fn heading_2(line: &str) -> Option<LineClass<'_>> {
    heading(line, 2)
}

pub fn heading_1(line: &str) -> Option<LineClass<'_>> {
    heading(line, 1)
}

pub fn rule(line: &str) -> Option<LineClass<'_>> {
    ThematicBreak::matches(line).then_some(LineClass::Rule)
}

pub fn quote(line: &str) -> Option<LineClass<'_>> {
    BlockQuote::strip(line).map(LineClass::Quote)
}

pub fn bullet_item(line: &str) -> Option<LineClass<'_>> {
    ListMarker::strip_bullet(line).map(LineClass::BulletItem)
}

pub fn ordered_item(line: &str) -> Option<LineClass<'_>> {
    ListMarker::strip_ordered(line).map(LineClass::OrderedItem)
}
