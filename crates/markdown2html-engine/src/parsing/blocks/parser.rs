use std::collections::VecDeque;

use crate::{parsing::registry::Registry, tree::Element};

use super::{BlockRule, segment::split_blocks};

/// Runs the block rule table over a queue of blocks.
pub struct BlockParser<'a> {
    rules: &'a Registry<Box<dyn BlockRule>>,
    tab_length: usize,
    fenced_blocks: bool,
}

impl<'a> BlockParser<'a> {
    pub fn new(rules: &'a Registry<Box<dyn BlockRule>>, tab_length: usize) -> Self {
        Self {
            rules,
            tab_length,
            fenced_blocks: false,
        }
    }

    /// Keep fenced code together as one block during segmentation.
    #[must_use]
    pub fn with_fenced_blocks(mut self, fenced_blocks: bool) -> Self {
        self.fenced_blocks = fenced_blocks;
        self
    }

    pub fn tab_length(&self) -> usize {
        self.tab_length
    }

    /// Segments `text` into blocks and parses them into `parent`.
    pub fn parse_chunk(&self, parent: &mut Element, text: &str) {
        let mut blocks: VecDeque<String> = split_blocks(text, self.fenced_blocks).into();
        self.parse_blocks(parent, &mut blocks);
    }

    /// Parses already-segmented blocks into `parent` until none remain.
    pub fn parse_blocks(&self, parent: &mut Element, blocks: &mut VecDeque<String>) {
        while let Some(block) = blocks.front() {
            let chosen = self.rules.iter().find(|(_, rule)| rule.test(parent, block));
            let Some((name, rule)) = chosen else {
                log::warn!("no block rule accepted a block; dropping it");
                blocks.pop_front();
                continue;
            };

            log::debug!("block rule `{name}` in <{}>", parent.tag);
            rule.run(self, parent, blocks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    struct Everything;

    impl BlockRule for Everything {
        fn test(&self, _parent: &Element, _block: &str) -> bool {
            true
        }

        fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
            if let Some(block) = blocks.pop_front() {
                parent.push(Element::new("p").with_child(Node::inline(block)));
            }
        }
    }

    struct Never;

    impl BlockRule for Never {
        fn test(&self, _parent: &Element, _block: &str) -> bool {
            false
        }

        fn run(&self, _parser: &BlockParser<'_>, _parent: &mut Element, _blocks: &mut VecDeque<String>) {
            unreachable!("never tested true");
        }
    }

    #[test]
    fn each_block_goes_to_first_accepting_rule() {
        let mut rules: Registry<Box<dyn BlockRule>> = Registry::new();
        rules.register("never", 100, Box::new(Never));
        rules.register("everything", 0, Box::new(Everything));

        let mut root = Element::new("div");
        BlockParser::new(&rules, 4).parse_chunk(&mut root, "a\n\nb");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.text_content(), "ab");
    }

    #[test]
    fn unclaimed_blocks_are_dropped() {
        let mut rules: Registry<Box<dyn BlockRule>> = Registry::new();
        rules.register("never", 100, Box::new(Never));

        let mut root = Element::new("div");
        BlockParser::new(&rules, 4).parse_chunk(&mut root, "a");
        assert!(root.children.is_empty());
    }
}
