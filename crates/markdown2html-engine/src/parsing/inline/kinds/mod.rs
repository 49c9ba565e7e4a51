//! # Inline Kinds
//!
//! Built-in inline rules. Each type owns its delimiters and regex; the parser
//! never hardcodes syntax.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick runs, a raw zone
//! - **`Escape`**: `\` followed by a Markdown punctuation character
//! - **`SimpleTagRule`**: one capture group wrapped in a fixed tag (strong, em)
//! - **`UnderscoreEmphasis`**: `_em_` only at word boundaries
//! - **`Link`**, **`Image`**, **`Autolink`**
//! - **`LineBreak`**: two trailing spaces before a newline

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod line_break;
pub mod link;
pub mod simple_tag;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong, UnderscoreEmphasis};
pub use escape::Escape;
pub use line_break::LineBreak;
pub use link::{Autolink, Image, Link};
pub use simple_tag::SimpleTagRule;
