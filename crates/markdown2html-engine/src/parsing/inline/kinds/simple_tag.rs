use regex::Regex;

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::{Element, Node},
};

/// Wraps the first capture group of `regex` in a `tag` element.
///
/// The captured text stays pending, so rules later in the scan still apply
/// inside it.
pub struct SimpleTagRule {
    regex: Regex,
    tag: &'static str,
}

impl SimpleTagRule {
    pub fn new(regex: Regex, tag: &'static str) -> Self {
        Self { regex, tag }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl InlineRule for SimpleTagRule {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            replacement: Replacement::node(
                Element::new(self.tag).with_child(Node::inline(inner.as_str())),
            ),
        })
    }
}
