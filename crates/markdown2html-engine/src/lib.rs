pub mod extension;
pub mod io;
pub mod options;
pub mod parsing;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use extension::{CustomExtension, Extension, ExtraExtension};
pub use io::{ConvertError, convert_file, read_markdown, write_html};
pub use options::Options;
pub use parsing::{
    Markdown, blocks::BlockRule, inline::InlineRule, markdown_to_html, registry::Registry,
};
pub use tree::{Element, Node};
