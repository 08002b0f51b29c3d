/// Fenced code block type with owned delimiter constant.
///
/// Fences are resolved before line classification (see `parsing::runs`), so
/// this type only owns the marker.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";
}
