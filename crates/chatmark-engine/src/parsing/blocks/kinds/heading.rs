/// ATX-style heading type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest supported heading level.
    pub const MAX_LEVEL: u8 = 3;

    /// Returns the heading text if `line` is a heading of exactly `level`.
    ///
    /// The line must start with `level` markers followed by a space, and the
    /// remaining text must not be blank. `#### x` is not a level-3 heading.
    pub fn strip(line: &str, level: u8) -> Option<&str> {
        let n = usize::from(level);
        let b = line.as_bytes();
        if b.len() <= n + 1 {
            return None;
        }
        if !b[..n].iter().all(|&c| c == Self::MARKER as u8) || b[n] != b' ' {
            return None;
        }
        let rest = &line[n + 1..];
        (!rest.trim().is_empty()).then_some(rest)
    }
}
