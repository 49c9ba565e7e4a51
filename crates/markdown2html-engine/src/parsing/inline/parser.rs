use crate::{
    parsing::registry::Registry,
    tree::{Element, Node},
};

use super::rule::{InlineMatch, InlineRule};

/// Runs the inline rule table over pending text.
///
/// At each step every rule reports its leftmost match in the remaining text.
/// The earliest start wins; on a tie the rule earlier in the table wins.
/// Text before the match is emitted verbatim and scanning resumes after it.
pub struct InlineParser<'a> {
    rules: &'a Registry<Box<dyn InlineRule>>,
}

impl<'a> InlineParser<'a> {
    pub fn new(rules: &'a Registry<Box<dyn InlineRule>>) -> Self {
        Self { rules }
    }

    /// Scans `text` into final nodes.
    pub fn parse(&self, text: &str) -> Vec<Node> {
        let mut out = vec![];
        let mut pos = 0;

        while pos < text.len() {
            let Some((name, m)) = self.next_match(text, pos) else {
                break;
            };
            log::trace!("inline rule `{name}` matched {}..{}", m.start, m.end);

            push_text(&mut out, &text[pos..m.start]);
            if let Some(mut el) = m.replacement.node {
                self.expand(&mut el);
                out.push(Node::Element(el));
            }
            if let Some(tail) = m.replacement.tail {
                push_text(&mut out, &tail);
            }
            pos = m.end;
        }

        push_text(&mut out, &text[pos..]);
        out
    }

    /// Replaces every `Inline` node below `el` with its scanned output.
    pub fn expand(&self, el: &mut Element) {
        let children = std::mem::take(&mut el.children);
        for child in children {
            match child {
                Node::Inline(src) => el.children.extend(self.parse(&src)),
                Node::Element(mut child) => {
                    self.expand(&mut child);
                    el.children.push(Node::Element(child));
                }
                text @ Node::Text(_) => el.children.push(text),
            }
        }
    }

    fn next_match(&self, text: &str, from: usize) -> Option<(&'a str, InlineMatch)> {
        let mut best: Option<(&'a str, InlineMatch)> = None;
        for (name, rule) in self.rules.iter() {
            let Some(m) = rule.find(text, from) else {
                continue;
            };
            if m.end <= m.start || m.start < from {
                continue;
            }
            match &best {
                Some((_, b)) if b.start <= m.start => {}
                _ => best = Some((name, m)),
            }
        }
        best
    }
}

/// Appends text, merging with a preceding text node.
fn push_text(out: &mut Vec<Node>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(Node::text(s));
    }
}
