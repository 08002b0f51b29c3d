pub mod escape;
pub mod message;
pub mod parsing;
pub mod render;
pub mod transcript;

// Re-export key types for easier usage
pub use escape::escape;
pub use message::{Attachment, AttachmentKind, DEFAULT_ATTACHMENT_PREFIX, Message, MessageView, Role, route};
pub use parsing::{Document, parse_document};
pub use render::{RenderOptions, Renderer, render};
pub use transcript::TranscriptRenderer;
