use std::collections::VecDeque;

use regex::Regex;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

/// `#`-prefixed headings, levels one to six. Closing hashes are dropped.
///
/// A heading line may appear mid-block: preceding lines are parsed first and
/// following lines are pushed back as a new block.
pub struct HashHeader {
    regex: Regex,
}

impl HashHeader {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"(?m)^(#{1,6})(.*?)#*$").expect("Invalid hash header regex"),
        }
    }
}

impl Default for HashHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRule for HashHeader {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        self.regex.is_match(block)
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let Some(caps) = self.regex.captures(&block) else {
            return;
        };
        let Some(whole) = caps.get(0) else {
            return;
        };

        let level = caps[1].len();
        let before = block[..whole.start()].trim_end_matches('\n');
        let after = block[whole.end()..].trim_start_matches('\n');

        if !before.trim().is_empty() {
            parser.parse_blocks(parent, &mut VecDeque::from([before.to_string()]));
        }
        parent.push(Element::new(format!("h{level}")).with_child(Node::inline(caps[2].trim())));
        if !after.trim().is_empty() {
            blocks.push_front(after.to_string());
        }
    }
}

/// Underlined headings: `===` for level one, `---` for level two.
pub struct SetextHeader {
    regex: Regex,
}

impl SetextHeader {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"^([^\n]*)\n(=+|-+)[ ]*(?:\n|$)")
                .expect("Invalid setext header regex"),
        }
    }
}

impl Default for SetextHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRule for SetextHeader {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        self.regex.is_match(block)
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let Some(caps) = self.regex.captures(&block) else {
            return;
        };
        let Some(whole) = caps.get(0) else {
            return;
        };

        let tag = if caps[2].starts_with('=') { "h1" } else { "h2" };
        parent.push(Element::new(tag).with_child(Node::inline(caps[1].trim())));

        let after = &block[whole.end()..];
        if !after.trim().is_empty() {
            blocks.push_front(after.to_string());
        }
    }
}
