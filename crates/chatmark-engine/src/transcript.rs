//! Transcript-level rendering: message routing plus the bubble and pill templates.

use crate::{
    escape::escape,
    message::{Attachment, DEFAULT_ATTACHMENT_PREFIX, Message, MessageView, Role, route},
    render::{RenderOptions, Renderer},
};

/// Shown in place of an empty conversation.
pub const EMPTY_TRANSCRIPT_HTML: &str = concat!(
    r#"<div class="empty">"#,
    r#"<div class="empty-glyph" aria-hidden="true">✦</div>"#,
    r#"<div class="empty-title">Start the conversation</div>"#,
    r#"<div class="empty-hint">Ask anything, upload a document, or share an image</div>"#,
    "</div>"
);

/// Renderer state for one transcript view.
///
/// Built once at startup from configuration and passed by reference to
/// whatever displays messages. Both history and the optimistic echo of a
/// just-sent message go through the same [`Renderer`].
#[derive(Debug, Clone)]
pub struct TranscriptRenderer {
    renderer: Renderer,
    attachment_prefix: String,
}

impl Default for TranscriptRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default(), DEFAULT_ATTACHMENT_PREFIX)
    }
}

impl TranscriptRenderer {
    pub fn new(options: RenderOptions, attachment_prefix: impl Into<String>) -> Self {
        Self {
            renderer: Renderer::new(options),
            attachment_prefix: attachment_prefix.into(),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn render_message(&self, message: &Message) -> String {
        match route(message, &self.attachment_prefix) {
            MessageView::Attachment(attachment) => attachment_pill(&attachment),
            MessageView::Hidden => {
                log::trace!("suppressing system message");
                String::new()
            }
            MessageView::Bubble { role, content } => self.bubble(role, content),
        }
    }

    /// Renders a whole history, or the empty-state block when there is none.
    pub fn render_transcript(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return EMPTY_TRANSCRIPT_HTML.to_string();
        }
        messages.iter().map(|m| self.render_message(m)).collect()
    }

    /// Renders a just-sent user message before the server confirms it.
    pub fn echo_user_message(&self, text: &str) -> String {
        self.bubble(Role::User, text.trim())
    }

    fn bubble(&self, role: Role, content: &str) -> String {
        format!(
            r#"<div class="msg-row {}" role="article"><div class="msg-bubble">{}</div></div>"#,
            role.as_str(),
            self.renderer.render(content)
        )
    }
}

fn attachment_pill(attachment: &Attachment<'_>) -> String {
    format!(
        r#"<div class="file-pill"><div class="file-pill-inner">{} <span>{}</span></div></div>"#,
        attachment.kind.icon(),
        escape(attachment.filename)
    )
}
