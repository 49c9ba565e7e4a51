use regex::Regex;

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::Element,
};

/// Two or more spaces before a newline → `<br />` followed by the newline.
pub struct LineBreak {
    regex: Regex,
}

impl LineBreak {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r" {2,}\n").expect("Invalid line break regex"),
        }
    }
}

impl Default for LineBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for LineBreak {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let m = self.regex.find_at(text, from)?;
        Some(InlineMatch {
            start: m.start(),
            end: m.end(),
            replacement: Replacement::node(Element::new("br")).with_tail("\n"),
        })
    }
}
