use regex::Regex;

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::{Element, Node},
};

use super::SimpleTagRule;

/// `**strong**` and `__strong__` → `<strong>`.
pub struct Strong;

impl Strong {
    pub const ASTERISK: &'static str = r"(?s)\*\*(.+?)\*\*";
    pub const UNDERSCORE: &'static str = r"(?s)__(.+?)__";

    pub fn asterisk() -> SimpleTagRule {
        SimpleTagRule::new(
            Regex::new(Self::ASTERISK).expect("Invalid strong regex"),
            "strong",
        )
    }

    pub fn underscore() -> SimpleTagRule {
        SimpleTagRule::new(
            Regex::new(Self::UNDERSCORE).expect("Invalid strong regex"),
            "strong",
        )
    }
}

/// `*em*` → `<em>`. The content may not start or end with whitespace.
pub struct Emphasis;

impl Emphasis {
    pub const ASTERISK: &'static str = r"(?s)\*([^\s*](?:.*?[^\s*])?)\*";

    pub fn asterisk() -> SimpleTagRule {
        SimpleTagRule::new(
            Regex::new(Self::ASTERISK).expect("Invalid emphasis regex"),
            "em",
        )
    }
}

/// `_em_` → `<em>`, only when neither underscore touches a word character,
/// so `snake_case_name` stays literal.
pub struct UnderscoreEmphasis {
    regex: Regex,
}

impl UnderscoreEmphasis {
    pub const PATTERN: &'static str = r"(?s)_([^\s_](?:.*?[^\s_])?)_";

    pub fn new() -> Self {
        Self {
            regex: Regex::new(Self::PATTERN).expect("Invalid emphasis regex"),
        }
    }
}

impl Default for UnderscoreEmphasis {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for UnderscoreEmphasis {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let mut at = from;
        while let Some(caps) = self.regex.captures_at(text, at) {
            let whole = caps.get(0)?;
            let open_ok = text[..whole.start()]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
            let close_ok = text[whole.end()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());

            if open_ok && close_ok {
                return Some(InlineMatch {
                    start: whole.start(),
                    end: whole.end(),
                    replacement: Replacement::node(
                        Element::new("em").with_child(Node::inline(caps.get(1)?.as_str())),
                    ),
                });
            }
            at = whole.start() + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(rule: &dyn InlineRule, text: &str) -> Option<(usize, usize)> {
        rule.find(text, 0).map(|m| (m.start, m.end))
    }

    #[test]
    fn strong_asterisk_is_non_greedy() {
        let rule = Strong::asterisk();
        assert_eq!(span(&rule, "**a** and **b**"), Some((0, 5)));
    }

    #[test]
    fn emphasis_skips_double_asterisk_start() {
        let rule = Emphasis::asterisk();
        assert_eq!(span(&rule, "**bold**"), Some((1, 7)));
        assert_eq!(span(&rule, "* not em *"), None);
    }

    #[test]
    fn underscore_emphasis_at_word_boundaries() {
        let rule = UnderscoreEmphasis::new();
        assert_eq!(span(&rule, "an _em_ word"), Some((3, 7)));
    }

    #[test]
    fn underscore_inside_words_is_literal() {
        let rule = UnderscoreEmphasis::new();
        assert_eq!(span(&rule, "snake_case_name"), None);
    }
}
