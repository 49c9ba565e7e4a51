use regex::Regex;

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::Element,
};

/// `((X))` → an empty `<p class="remove_c">` marker followed by X with every
/// `c` and `C` removed.
pub struct RemoveCRule {
    regex: Regex,
}

impl RemoveCRule {
    pub const PATTERN: &'static str = r"(?s)\(\((.+?)\)\)";
    pub const CLASS: &'static str = "remove_c";

    pub fn new() -> Self {
        Self {
            regex: Regex::new(Self::PATTERN).expect("Invalid remove_c regex"),
        }
    }

    pub fn strip(text: &str) -> String {
        text.chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
    }
}

impl Default for RemoveCRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for RemoveCRule {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let whole = caps.get(0)?;
        let marker = Element::new("p").with_attr("class", Self::CLASS);
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            replacement: Replacement::node(marker).with_tail(Self::strip(caps.get(1)?.as_str())),
        })
    }
}
