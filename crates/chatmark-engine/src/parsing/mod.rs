//! # Parsing
//!
//! Three strictly ordered phases, none of which re-enters an earlier one:
//!
//! 1. **Run extraction** (`runs`): fenced code regions are cut out of the input,
//!    leaving an ordered sequence of `Run::Markdown` and `Run::Code` segments.
//! 2. **Block parsing** (`blocks`): markdown runs are split into lines, each line
//!    is classified by an ordered list of predicates, and a `BlockBuilder` groups
//!    lines into blocks. Code runs pass through as opaque `Block::Code` units.
//! 3. **Inline formatting** (`inline`): invoked by the builder on every text
//!    span (heading, quote, list item, paragraph line), never on code bodies.

pub mod blocks;
pub mod inline;
pub mod runs;

use blocks::{Block, BlockBuilder, classify};
use inline::InlineFormatter;
use runs::{Run, extract_runs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Parses `text` into a [`Document`], inline-formatting every text span with `inline`.
///
/// Never fails: anything that is not recognised block syntax ends up as
/// paragraph text.
pub fn parse_document(text: &str, inline: &InlineFormatter) -> Document {
    let mut builder = BlockBuilder::new(inline);

    for run in extract_runs(text) {
        match run {
            Run::Markdown(md) => {
                for line in md.lines() {
                    builder.push(classify(line));
                }
            }
            Run::Code(code) => builder.push_code(code),
        }
    }

    Document {
        blocks: builder.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::blocks::CodeBlock;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Vec<Block> {
        parse_document(text, &InlineFormatter::default()).blocks
    }

    #[test]
    fn code_run_ends_open_paragraph() {
        let blocks = parse("intro line\n```\nx\n```\noutro");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    html: "intro line".into()
                },
                Block::Code(CodeBlock {
                    language: None,
                    body: "x".into()
                }),
                Block::Paragraph {
                    html: "outro".into()
                },
            ]
        );
    }

    #[test]
    fn code_body_is_not_formatted() {
        let blocks = parse("```\n# not a heading\n**not bold**\n```");
        assert_eq!(
            blocks,
            vec![Block::Code(CodeBlock {
                language: None,
                body: "# not a heading\n**not bold**".into()
            })]
        );
    }

    #[test]
    fn unterminated_fence_is_paragraph_text() {
        let blocks = parse("```rust\nlet x = 1;");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                html: "```rust let x = 1;".into()
            }]
        );
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }
}
