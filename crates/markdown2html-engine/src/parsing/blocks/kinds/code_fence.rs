use std::collections::VecDeque;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Length of the marker run; the closing run must be at least this long.
    pub len: usize,
    /// First word of the info string, used as the code language.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Recognizes an opening fence: three or more backticks or tildes after
    /// at most three spaces, followed by an optional info string.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let rest = Self::unindent(line)?;
        let kind = if rest.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if rest.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };

        let marker = kind.marker();
        let len = rest.len() - rest.trim_start_matches(marker).len();
        let info = rest[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }

        Some(FenceOpen {
            kind,
            len,
            info: info.split_whitespace().next().unwrap_or_default().to_string(),
        })
    }

    /// True if `line` is a closing fence for `open`.
    pub fn closes(open: &FenceOpen, line: &str) -> bool {
        let Some(rest) = Self::unindent(line) else {
            return false;
        };
        let marker = open.kind.marker();
        let after = rest.trim_start_matches(marker);
        rest.len() - after.len() >= open.len && after.trim().is_empty()
    }

    fn unindent(line: &str) -> Option<&str> {
        let rest = line.trim_start_matches(' ');
        (line.len() - rest.len() <= 3).then_some(rest)
    }
}

/// Fenced code: `pre > code`, with a `language-*` class from the info string.
pub struct FencedCode;

impl BlockRule for FencedCode {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        block
            .split('\n')
            .next()
            .and_then(CodeFence::open)
            .is_some()
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let mut lines = block.split('\n');
        let Some(open) = lines.next().and_then(CodeFence::open) else {
            return;
        };

        let mut body: Vec<&str> = lines.collect();
        if body.last().is_some_and(|line| CodeFence::closes(&open, line)) {
            body.pop();
        }

        let mut code = Element::new("code");
        if !open.info.is_empty() {
            code.set_attr("class", format!("language-{}", open.info));
        }
        let mut text = body.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        code.push(Node::text(text));
        parent.push(Element::new("pre").with_child(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_backtick_fence() {
        let open = CodeFence::open("```rust").unwrap();
        assert_eq!(open.kind, FenceKind::Backticks);
        assert_eq!(open.len, 3);
        assert_eq!(open.info, "rust");
    }

    #[test]
    fn detect_tilde_fence() {
        let open = CodeFence::open("  ~~~~ python extra").unwrap();
        assert_eq!(open.kind, FenceKind::Tildes);
        assert_eq!(open.len, 4);
        assert_eq!(open.info, "python");
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("``"), None);
        assert_eq!(CodeFence::open("    ```"), None);
        assert_eq!(CodeFence::open("``` a`b"), None);
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::open("````").unwrap();
        assert!(CodeFence::closes(&open, "````"));
        assert!(CodeFence::closes(&open, "`````  "));
        assert!(!CodeFence::closes(&open, "```"));
        assert!(!CodeFence::closes(&open, "```` x"));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = CodeFence::open("```").unwrap();
        assert!(!CodeFence::closes(&open, "~~~"));
    }
}
