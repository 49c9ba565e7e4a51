//! # Inline Parsing
//!
//! Rule-table inline scanning over the text that block rules leave pending.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing and the prettify pass. Every
//! [`crate::tree::Node::Inline`] in the tree is handed to [`InlineParser`],
//! which repeatedly asks each registered [`InlineRule`] for its leftmost match
//! and applies the earliest one.
//!
//! ## Modules
//!
//! - **`rule`**: `InlineRule` trait, `InlineMatch` and `Replacement`
//! - **`kinds`**: Built-in rules with owned delimiters (code spans, escapes,
//!   links, emphasis, line breaks)
//! - **`cursor`**: `Cursor` for hand-written scanners
//! - **`parser`**: `InlineParser`, the scan loop
//!
//! ## Raw Zones
//!
//! Code spans emit final text, so `` `[[not hashed]]` `` stays literal when
//! the code span starts first.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rule;

pub use parser::InlineParser;
pub use rule::{InlineMatch, InlineRule, Replacement};
