use std::collections::VecDeque;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

/// Paragraph block type.
///
/// Paragraphs have no delimiters. They are the default leaf block when no
/// other rule accepts a block; leading indentation is dropped.
pub struct Paragraph;

impl BlockRule for Paragraph {
    fn test(&self, _parent: &Element, _block: &str) -> bool {
        true
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        if let Some(block) = blocks.pop_front() {
            parent.push(Element::new("p").with_child(Node::inline(block.trim_start())));
        }
    }
}
