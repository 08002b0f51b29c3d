//! # Rendering
//!
//! `render(text) = html(parse(extract_runs(normalize(text))))`.
//!
//! The pipeline is total: any input string yields a fragment, and malformed
//! or incomplete markdown degrades to paragraph text.

pub mod html;

use crate::parsing::{inline::InlineFormatter, parse_document};

/// Output switches. The defaults match the chat front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `target="_blank"` on anchors.
    pub open_links_in_new_tab: bool,
    /// Emit `class="language-…"` on fenced code that names a language.
    pub code_language_class: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
            code_language_class: true,
        }
    }
}

/// Renders untrusted chat text into an HTML fragment that is safe to inject.
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    inline: InlineFormatter,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            inline: InlineFormatter::new(options.open_links_in_new_tab),
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        let doc = parse_document(&text, &self.inline);
        html::write_document(&doc, &self.options)
    }
}

/// Renders `text` with default options.
pub fn render(text: &str) -> String {
    Renderer::default().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_paragraph() {
        assert_eq!(render("just some words\nover two lines"), "<p>just some words over two lines</p>");
    }

    #[test]
    fn crlf_input() {
        assert_eq!(render("# A\r\n- b\r\n"), "<h1>A</h1><ul><li>b</li></ul>");
    }

    #[test]
    fn crlf_fence() {
        assert_eq!(render("```\r\nx\r\n```"), "<pre><code>x</code></pre>");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn options_flow_to_links_and_code() {
        let renderer = Renderer::new(RenderOptions {
            open_links_in_new_tab: false,
            code_language_class: false,
        });
        assert_eq!(
            renderer.render("https://e.com\n```rust\nfn main() {}\n```"),
            concat!(
                r#"<p><a href="https://e.com" rel="noopener noreferrer">https://e.com</a></p>"#,
                "<pre><code>fn main() {}</code></pre>"
            )
        );
    }

    #[test]
    fn renderer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
