//! Message records and the routing rules that decide what reaches the renderer.

use serde::{Deserialize, Serialize};

/// Prefix marking a system message as an attachment event.
pub const DEFAULT_ATTACHMENT_PREFIX: &str = "024b4faf-5861-4f6b-840c-8f9b4cb660b1_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// A message as supplied by the history/transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Document,
}

impl AttachmentKind {
    /// Type tag used for images; every other tag is a document.
    pub const IMAGE_TAG: &'static str = "img";

    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::IMAGE_TAG {
            AttachmentKind::Image
        } else {
            AttachmentKind::Document
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "🖼️",
            AttachmentKind::Document => "📄",
        }
    }
}

/// A structured attachment marker: `prefix + tag + ":" + filename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment<'a> {
    pub kind: AttachmentKind,
    pub filename: &'a str,
}

impl<'a> Attachment<'a> {
    /// Parses the part of the content after the prefix.
    ///
    /// Without a `:` the whole remainder is taken as a document filename.
    pub fn parse(rest: &'a str) -> Self {
        match rest.split_once(':') {
            Some((tag, filename)) => Self {
                kind: AttachmentKind::from_tag(tag),
                filename,
            },
            None => Self {
                kind: AttachmentKind::Document,
                filename: rest,
            },
        }
    }
}

/// What a message turns into in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageView<'a> {
    /// Rendered as an icon and filename pill, never through the renderer.
    Attachment(Attachment<'a>),
    /// Suppressed system message.
    Hidden,
    /// Content to pass through the renderer.
    Bubble { role: Role, content: &'a str },
}

/// Routes a message by role and attachment prefix.
pub fn route<'a>(message: &'a Message, attachment_prefix: &str) -> MessageView<'a> {
    match message.role {
        Role::System => match message.content.strip_prefix(attachment_prefix) {
            Some(rest) if !attachment_prefix.is_empty() => {
                MessageView::Attachment(Attachment::parse(rest))
            }
            _ => MessageView::Hidden,
        },
        role => MessageView::Bubble {
            role,
            content: &message.content,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_and_assistant_are_bubbles() {
        let m = Message::new(Role::User, "hi");
        assert_eq!(
            route(&m, DEFAULT_ATTACHMENT_PREFIX),
            MessageView::Bubble {
                role: Role::User,
                content: "hi"
            }
        );
        let m = Message::new(Role::Assistant, "hello");
        assert!(matches!(
            route(&m, DEFAULT_ATTACHMENT_PREFIX),
            MessageView::Bubble {
                role: Role::Assistant,
                ..
            }
        ));
    }

    #[test]
    fn system_message_is_hidden() {
        let m = Message::new(Role::System, "You are a helpful assistant.");
        assert_eq!(route(&m, DEFAULT_ATTACHMENT_PREFIX), MessageView::Hidden);
    }

    #[test]
    fn image_attachment() {
        let m = Message::new(Role::System, format!("{DEFAULT_ATTACHMENT_PREFIX}img:cat.png"));
        assert_eq!(
            route(&m, DEFAULT_ATTACHMENT_PREFIX),
            MessageView::Attachment(Attachment {
                kind: AttachmentKind::Image,
                filename: "cat.png"
            })
        );
    }

    #[test]
    fn document_attachment_keeps_colons_in_filename() {
        let m = Message::new(Role::System, format!("{DEFAULT_ATTACHMENT_PREFIX}doc:a:b.pdf"));
        assert_eq!(
            route(&m, DEFAULT_ATTACHMENT_PREFIX),
            MessageView::Attachment(Attachment {
                kind: AttachmentKind::Document,
                filename: "a:b.pdf"
            })
        );
    }

    #[test]
    fn attachment_without_tag() {
        assert_eq!(
            Attachment::parse("notes.txt"),
            Attachment {
                kind: AttachmentKind::Document,
                filename: "notes.txt"
            }
        );
    }

    #[test]
    fn prefix_only_applies_to_system_role() {
        let content = format!("{DEFAULT_ATTACHMENT_PREFIX}img:cat.png");
        let m = Message::new(Role::User, content.clone());
        assert_eq!(
            route(&m, DEFAULT_ATTACHMENT_PREFIX),
            MessageView::Bubble {
                role: Role::User,
                content: &content
            }
        );
    }

    #[test]
    fn empty_prefix_never_matches() {
        let m = Message::new(Role::System, "img:cat.png");
        assert_eq!(route(&m, ""), MessageView::Hidden);
    }

    #[test]
    fn deserializes_lowercase_roles() {
        let messages: Vec<Message> = serde_json::from_str(
            r#"[{"role":"user","content":"a"},{"role":"assistant","content":"b"},{"role":"system","content":"c"}]"#,
        )
        .unwrap();
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::System]);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<Message, _> = serde_json::from_str(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }
}
