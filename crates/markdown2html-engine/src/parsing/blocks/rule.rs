use std::collections::VecDeque;

use crate::tree::Element;

use super::BlockParser;

/// A block-level rule.
///
/// `test` sees the front block without consuming it; `run` must pop at least
/// that block from `blocks`.
pub trait BlockRule: Send + Sync {
    fn test(&self, parent: &Element, block: &str) -> bool;

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>);
}
