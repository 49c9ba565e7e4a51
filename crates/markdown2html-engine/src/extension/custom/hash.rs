use regex::Regex;

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::Element,
};

/// `[[X]]` → an empty `<p class="md5">` marker followed by the MD5 digest of
/// X as 32 lowercase hex characters.
pub struct HashRule {
    regex: Regex,
}

impl HashRule {
    pub const PATTERN: &'static str = r"(?s)\[\[(.+?)\]\]";
    pub const CLASS: &'static str = "md5";

    pub fn new() -> Self {
        Self {
            regex: Regex::new(Self::PATTERN).expect("Invalid md5 regex"),
        }
    }

    /// Lowercase hex MD5 of the UTF-8 bytes of `text`.
    pub fn digest(text: &str) -> String {
        format!("{:x}", md5::compute(text.as_bytes()))
    }
}

impl Default for HashRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for HashRule {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let whole = caps.get(0)?;
        let marker = Element::new("p").with_attr("class", Self::CLASS);
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            replacement: Replacement::node(marker).with_tail(Self::digest(caps.get(1)?.as_str())),
        })
    }
}
