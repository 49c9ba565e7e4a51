use serde::{Deserialize, Serialize};

/// Converter options.
///
/// Every field has a default, so a partial TOML table deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Register bold, `[[md5]]`, `((remove c))` and the custom block rules.
    pub custom_syntax: bool,
    /// Register fenced code blocks and tables.
    pub extra: bool,
    /// Columns per tab stop. Also the indent that nests lists and marks
    /// indented code.
    pub tab_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            custom_syntax: true,
            extra: true,
            tab_length: 4,
        }
    }
}
