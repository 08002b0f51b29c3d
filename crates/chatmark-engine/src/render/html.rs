use crate::{
    escape::escape,
    parsing::{
        Document,
        blocks::{Block, CodeBlock},
    },
};

use super::RenderOptions;

/// Writes each block with its fixed template, in document order, with no separators.
pub fn write_document(doc: &Document, options: &RenderOptions) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(&mut out, block, options);
    }
    out
}

fn write_block(out: &mut String, block: &Block, options: &RenderOptions) {
    match block {
        Block::Heading { level, html } => {
            out.push_str(&format!("<h{level}>{html}</h{level}>"));
        }
        Block::Rule => out.push_str("<hr>"),
        Block::Quote { html } => {
            out.push_str("<blockquote>");
            out.push_str(html);
            out.push_str("</blockquote>");
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                out.push_str(item);
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        Block::Paragraph { html } => {
            out.push_str("<p>");
            out.push_str(html);
            out.push_str("</p>");
        }
        Block::Code(code) => write_code(out, code, options),
    }
}

fn write_code(out: &mut String, code: &CodeBlock, options: &RenderOptions) {
    match &code.language {
        Some(lang) if options.code_language_class => {
            out.push_str(&format!(r#"<pre><code class="language-{}">"#, escape(lang)));
        }
        _ => out.push_str("<pre><code>"),
    }
    // Body was escaped at extraction.
    out.push_str(&code.body);
    out.push_str("</code></pre>");
}
