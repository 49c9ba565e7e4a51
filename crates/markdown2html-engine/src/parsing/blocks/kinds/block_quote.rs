use std::collections::VecDeque;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::Element,
};

/// Blockquote block type.
///
/// Quoted lines are stripped of one `>` level and parsed recursively, so
/// nested quotes fall out of the recursion. A quote directly following
/// another quote continues it.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one quote level from a line: `>` after at most three spaces,
    /// plus one optional space. Returns `None` for unquoted lines.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start_matches(' ');
        if line.len() - rest.len() > 3 {
            return None;
        }
        let rest = rest.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

impl BlockRule for BlockQuote {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        block
            .split('\n')
            .any(|line| Self::strip_prefix(line).is_some())
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let lines: Vec<&str> = block.split('\n').collect();
        let Some(first) = lines
            .iter()
            .position(|line| Self::strip_prefix(line).is_some())
        else {
            return;
        };

        let before = lines[..first].join("\n");
        if !before.trim().is_empty() {
            parser.parse_blocks(parent, &mut VecDeque::from([before]));
        }

        let quoted = lines[first..]
            .iter()
            .map(|&line| Self::strip_prefix(line).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");

        if parent.last_element().is_none_or(|el| el.tag != "blockquote") {
            parent.push(Element::new("blockquote"));
        }
        if let Some(quote) = parent.last_element_mut() {
            parser.parse_chunk(quote, &quoted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parsing::{blocks::kinds::Paragraph, registry::Registry},
        tree::Node,
    };
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Element {
        let mut rules: Registry<Box<dyn BlockRule>> = Registry::new();
        rules.register("quote", 20, Box::new(BlockQuote));
        rules.register("paragraph", 10, Box::new(Paragraph));
        let mut root = Element::new("div");
        BlockParser::new(&rules, 4).parse_chunk(&mut root, text);
        root
    }

    fn p(text: &str) -> Node {
        Element::new("p").with_child(Node::inline(text)).into()
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
        assert_eq!(BlockQuote::strip_prefix("    > code"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn strip_one_level_of_nesting() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }

    #[test]
    fn lazy_lines_stay_in_quote() {
        let root = parse("> a\nb");
        let expected = Element::new("blockquote").with_child(p("a\nb"));
        assert_eq!(root.children, vec![expected.into()]);
    }

    #[test]
    fn nested_quotes_recurse() {
        let root = parse("> > deep");
        let expected =
            Element::new("blockquote").with_child(Element::new("blockquote").with_child(p("deep")));
        assert_eq!(root.children, vec![expected.into()]);
    }

    #[test]
    fn adjacent_quotes_merge() {
        let root = parse("> a\n\n> b");
        let expected = Element::new("blockquote").with_child(p("a")).with_child(p("b"));
        assert_eq!(root.children, vec![expected.into()]);
    }

    #[test]
    fn lines_before_the_quote_parse_first() {
        let root = parse("intro\n> quoted");
        let expected = vec![
            p("intro"),
            Element::new("blockquote").with_child(p("quoted")).into(),
        ];
        assert_eq!(root.children, expected);
    }
}
