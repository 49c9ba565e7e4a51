//! # Block Parsing
//!
//! Two-phase block parsing driven by a priority-ordered rule table.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the normalized document is split into
//!    blocks on blank lines. Fenced code is a raw zone and always forms one
//!    block, blank lines included.
//!
//! 2. **Rule loop** (`parser`): `BlockParser` takes the front block, finds the
//!    first `BlockRule` whose `test` accepts it and lets that rule `run`. A
//!    rule may consume several blocks, push text back, or recurse with a
//!    nested parent (list items, block quotes).
//!
//! ## Modules
//!
//! - **`rule`**: the `BlockRule` trait
//! - **`kinds`**: built-in rules with owned delimiters (code, tables,
//!   headings, rules, lists, quotes, paragraphs)
//! - **`segment`**: normalization and blank-line segmentation
//! - **`parser`**: `BlockParser`, the rule loop
//!
//! ## Key Invariants
//!
//! - Every block is consumed by exactly one rule run
//! - Block order is preserved
//! - Block rules never inline-process text; they leave it as `Node::Inline`

pub mod kinds;
pub mod parser;
pub mod rule;
pub mod segment;

pub use parser::BlockParser;
pub use rule::BlockRule;
pub use segment::{normalize, split_blocks};
