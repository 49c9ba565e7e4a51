use std::collections::VecDeque;

use regex::Regex;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::Element,
};

/// A line of three or more `-`, `_` or `*`, optionally spaced.
///
/// The rule may sit anywhere in a block; lines before it are parsed as their
/// own block and lines after it are pushed back.
pub struct HorizontalRule {
    regex: Regex,
}

impl HorizontalRule {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(
                r"(?m)^ {0,3}(?:(?:-[ ]{0,2}){3,}|(?:_[ ]{0,2}){3,}|(?:\*[ ]{0,2}){3,})$",
            )
            .expect("Invalid horizontal rule regex"),
        }
    }
}

impl Default for HorizontalRule {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRule for HorizontalRule {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        self.regex.is_match(block)
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let Some(m) = self.regex.find(&block) else {
            return;
        };

        let before = block[..m.start()].trim_end_matches('\n');
        let after = block[m.end()..].trim_start_matches('\n');

        if !before.trim().is_empty() {
            parser.parse_blocks(parent, &mut VecDeque::from([before.to_string()]));
        }
        parent.push(Element::new("hr"));
        if !after.trim().is_empty() {
            blocks.push_front(after.to_string());
        }
    }
}
