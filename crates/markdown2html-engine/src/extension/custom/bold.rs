use regex::Regex;

use crate::parsing::inline::kinds::SimpleTagRule;

/// `**X**` and `__X__` → `<b>X</b>`.
///
/// X is matched lazily up to the first closing pair and stays pending, so
/// `**[[a]]**` hashes inside the bold element.
pub struct Bold;

impl Bold {
    pub const ASTERISK: &'static str = r"(?s)\*\*(.+?)\*\*";
    pub const UNDERSCORE: &'static str = r"(?s)__(.+?)__";

    pub fn asterisk() -> SimpleTagRule {
        SimpleTagRule::new(Regex::new(Self::ASTERISK).expect("Invalid bold regex"), "b")
    }

    pub fn underscore() -> SimpleTagRule {
        SimpleTagRule::new(Regex::new(Self::UNDERSCORE).expect("Invalid bold regex"), "b")
    }
}
