use regex::Regex;

use crate::parsing::inline::{InlineMatch, InlineRule, Replacement};

/// Backslash escape: `\*` becomes a literal `*` that no later rule sees.
pub struct Escape {
    regex: Regex,
}

impl Escape {
    /// Characters that may follow a backslash.
    pub const ESCAPABLE: &'static str = r"\`*_{}[]()#+-.!>";

    pub fn new() -> Self {
        let class = regex::escape(Self::ESCAPABLE);
        Self {
            regex: Regex::new(&format!(r"\\([{class}])")).expect("Invalid escape regex"),
        }
    }
}

impl Default for Escape {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for Escape {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let whole = caps.get(0)?;
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            replacement: Replacement::text(caps.get(1)?.as_str()),
        })
    }
}
