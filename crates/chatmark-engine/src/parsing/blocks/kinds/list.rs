/// List item markers with owned delimiter constants.
pub struct ListMarker;

impl ListMarker {
    /// Recognised unordered bullets. Any of them continues the same list.
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// Separator between an ordered item's number and its text.
    pub const ORDERED_SEP: &'static str = ". ";

    /// Returns the item text if `line` starts with a bullet followed by a space.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let bullet = chars.next()?;
        if !Self::BULLETS.contains(&bullet) {
            return None;
        }
        chars.as_str().strip_prefix(' ')
    }

    /// Returns the item text if `line` starts with digits, `.` and a space.
    ///
    /// The number itself is not validated; rendering renumbers from one.
    pub fn strip_ordered(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(Self::ORDERED_SEP)
    }
}
