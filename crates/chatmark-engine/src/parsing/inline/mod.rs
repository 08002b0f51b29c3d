//! # Inline Formatting
//!
//! Ordered substitution passes over a single line of text, with inline code
//! spans as raw zones.
//!
//! ## Pipeline
//!
//! 1. Inline code spans are cut out of the raw line and escaped on their own;
//!    the rest of the line is escaped once. Each code span leaves a `<@N>`
//!    marker behind. A raw `<` cannot survive escaping, so markers never
//!    collide with user text.
//! 2. Emphasis passes run in fixed order (`***`, `__`, `**`, `*`, `_`, `~~`).
//!    Each pass sees the output of the previous one.
//! 3. Markdown links, then bare-URL autolinks outside existing anchors.
//! 4. Markers are replaced by `<code>` elements.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`formatter`**: `InlineFormatter`, the entry point

pub mod formatter;
pub mod kinds;

pub use formatter::InlineFormatter;
