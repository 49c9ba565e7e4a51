use std::collections::VecDeque;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

use super::dedent_lines;

/// Code indented by a full tab stop. Consecutive indented blocks join into
/// one `pre > code`, separated by a blank line.
pub struct IndentedCode {
    indent: String,
}

impl IndentedCode {
    pub fn new(tab_length: usize) -> Self {
        Self {
            indent: " ".repeat(tab_length.max(1)),
        }
    }

    fn is_indented(&self, block: &str) -> bool {
        block.starts_with(&self.indent)
    }
}

impl BlockRule for IndentedCode {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        self.is_indented(block)
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(mut source) = blocks.pop_front() else {
            return;
        };
        while let Some(next) = blocks.pop_front() {
            if !self.is_indented(&next) {
                blocks.push_front(next);
                break;
            }
            source.push_str("\n\n");
            source.push_str(&next);
        }

        let mut text = dedent_lines(&source, self.indent.len())
            .trim_end_matches('\n')
            .to_string();
        text.push('\n');

        let code = Element::new("code").with_child(Node::text(text));
        parent.push(Element::new("pre").with_child(code));
    }
}
