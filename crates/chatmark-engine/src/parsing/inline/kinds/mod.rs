pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{EMPHASIS_PASSES, Emphasis};
pub use link::Link;
