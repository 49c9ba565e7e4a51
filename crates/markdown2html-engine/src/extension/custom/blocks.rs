use std::collections::VecDeque;

use crate::{
    parsing::blocks::{
        BlockParser, BlockRule,
        kinds::{List, ListKind},
    },
    tree::{Element, Node},
};

/// Wraps any block no other rule claims in a `<p>`, text kept verbatim.
pub struct ParagraphFallback;

impl BlockRule for ParagraphFallback {
    fn test(&self, _parent: &Element, _block: &str) -> bool {
        true
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        if let Some(block) = blocks.pop_front() {
            parent.push(Element::new("p").with_child(Node::inline(block)));
        }
    }
}

/// List rule registered ahead of block quotes; delegates to [`List`].
pub struct ListContinuation {
    inner: List,
}

impl ListContinuation {
    pub fn new(kind: ListKind, tab_length: usize) -> Self {
        Self {
            inner: List::new(kind, tab_length),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.inner.kind()
    }
}

impl BlockRule for ListContinuation {
    fn test(&self, parent: &Element, block: &str) -> bool {
        self.inner.test(parent, block)
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        self.inner.run(parser, parent, blocks);
    }
}
