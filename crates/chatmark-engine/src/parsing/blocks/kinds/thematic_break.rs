/// Horizontal rule type with owned delimiter constants.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Characters that may form a rule. A rule uses only one of them.
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    /// Minimum run length.
    pub const MIN_LEN: usize = 3;

    /// Whether the trimmed line is three or more copies of a single rule character.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && t.len() >= Self::MIN_LEN
            && t.chars().all(|c| c == first)
    }
}
