pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod horizontal_rule;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen, FencedCode};
pub use heading::{HashHeader, SetextHeader};
pub use horizontal_rule::HorizontalRule;
pub use indented_code::IndentedCode;
pub use list::{List, ListIndent, ListKind};
pub use paragraph::Paragraph;
pub use table::Table;

/// Strips up to `width` leading spaces from `line`.
pub(crate) fn dedent(line: &str, width: usize) -> &str {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    &line[spaces.min(width)..]
}

/// Strips up to `width` leading spaces from every line of `text`.
pub(crate) fn dedent_lines(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| dedent(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}
