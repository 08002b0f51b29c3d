use crate::parsing::inline::InlineFormatter;

use super::{
    classify::LineClass,
    types::{Block, CodeBlock},
};

#[derive(Debug)]
enum GroupState {
    None,
    Paragraph { lines: Vec<String> },
    List { ordered: bool, items: Vec<String> },
}

/// Folds classified lines into blocks.
///
/// Lists and paragraphs are open groups: a line joins the group while it
/// matches the group's continuation rule, and the first line that does not
/// closes it. There is no look-ahead and no backtracking.
pub struct BlockBuilder<'f> {
    inline: &'f InlineFormatter,
    group: GroupState,
    out: Vec<Block>,
}

impl<'f> BlockBuilder<'f> {
    pub fn new(inline: &'f InlineFormatter) -> Self {
        Self {
            inline,
            group: GroupState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        match line {
            LineClass::Heading { level, text } => {
                self.flush_group();
                let html = self.inline.format(text);
                self.out.push(Block::Heading { level, html });
            }
            LineClass::Rule => {
                self.flush_group();
                self.out.push(Block::Rule);
            }
            LineClass::Quote(text) => {
                self.flush_group();
                let html = self.inline.format(text);
                self.out.push(Block::Quote { html });
            }
            LineClass::BulletItem(text) => self.extend_list(false, text),
            LineClass::OrderedItem(text) => self.extend_list(true, text),
            LineClass::Blank => self.flush_group(),
            LineClass::Text(text) => self.extend_paragraph(text),
        }
    }

    /// Emits an extracted code region as an opaque block.
    pub fn push_code(&mut self, code: CodeBlock) {
        self.flush_group();
        self.out.push(Block::Code(code));
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_group();
        self.out
    }

    fn extend_list(&mut self, ordered: bool, text: &str) {
        let item = self.inline.format(text);
        match &mut self.group {
            GroupState::List {
                ordered: open_ordered,
                items,
            } if *open_ordered == ordered => items.push(item),
            _ => {
                self.flush_group();
                self.group = GroupState::List {
                    ordered,
                    items: vec![item],
                };
            }
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        let line = self.inline.format(text);
        match &mut self.group {
            GroupState::Paragraph { lines } => lines.push(line),
            _ => {
                self.flush_group();
                self.group = GroupState::Paragraph { lines: vec![line] };
            }
        }
    }

    fn flush_group(&mut self) {
        match std::mem::replace(&mut self.group, GroupState::None) {
            GroupState::None => {}
            GroupState::Paragraph { lines } => self.out.push(Block::Paragraph {
                html: lines.join(" "),
            }),
            GroupState::List { ordered, items } => self.out.push(Block::List { ordered, items }),
        }
    }
}
