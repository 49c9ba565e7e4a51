//! # Extensions
//!
//! Bundles of rules registered onto a [`Markdown`] after its base tables are
//! built. An extension adds rules or replaces existing ones by registering
//! under the same name.
//!
//! - **`extra`**: fenced code blocks and pipe tables
//! - **`custom`**: bold, `[[md5]]`, `((remove c))`, paragraph fallback and
//!   list continuation

pub mod custom;
pub mod extra;

use crate::parsing::Markdown;

pub use custom::CustomExtension;
pub use extra::ExtraExtension;

pub trait Extension {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn extend(&self, md: &mut Markdown);
}
