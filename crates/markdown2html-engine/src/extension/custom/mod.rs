//! # Custom Syntax
//!
//! Three inline rewriters and two block rules on top of the base tables.
//!
//! ## Inline Rules
//!
//! All registered at priority 175, just below backslash escapes, in this order:
//!
//! - **`bold`** / **`bold_underscore`**: `**X**` and `__X__` → `<b>X</b>`
//! - **`md5`**: `[[X]]` → `<p class="md5"></p>` followed by the hex digest of X
//! - **`remove_c`**: `((X))` → `<p class="remove_c"></p>` followed by X without
//!   any `c` or `C`
//!
//! The marker elements are empty; the computed text trails them as literal
//! text that no other rule sees.
//!
//! ## Block Rules
//!
//! - **`paragraph`** (priority 0): [`ParagraphFallback`] wraps any block no
//!   other rule claims, untrimmed
//! - **`olist`** / **`ulist`** (priority 25): [`ListContinuation`]

pub mod blocks;
pub mod bold;
pub mod hash;
pub mod remove_c;

pub use blocks::{ListContinuation, ParagraphFallback};
pub use bold::Bold;
pub use hash::HashRule;
pub use remove_c::RemoveCRule;

use crate::parsing::{Markdown, blocks::kinds::ListKind};

use super::Extension;

/// Priority shared by the custom inline rules.
pub const INLINE_PRIORITY: u32 = 175;
/// Priority of the list continuation rules.
pub const LIST_PRIORITY: u32 = 25;
/// Priority of the paragraph fallback, below every other block rule.
pub const FALLBACK_PRIORITY: u32 = 0;

pub struct CustomExtension;

impl Extension for CustomExtension {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn extend(&self, md: &mut Markdown) {
        let inline = md.inline_rules_mut();
        inline.register("bold", INLINE_PRIORITY, Box::new(Bold::asterisk()));
        inline.register("bold_underscore", INLINE_PRIORITY, Box::new(Bold::underscore()));
        inline.register("md5", INLINE_PRIORITY, Box::new(HashRule::new()));
        inline.register("remove_c", INLINE_PRIORITY, Box::new(RemoveCRule::new()));

        let tab_length = md.tab_length();
        let blocks = md.block_rules_mut();
        blocks.register(
            "paragraph",
            FALLBACK_PRIORITY,
            Box::new(ParagraphFallback),
        );
        blocks.register(
            "olist",
            LIST_PRIORITY,
            Box::new(ListContinuation::new(ListKind::Ordered, tab_length)),
        );
        blocks.register(
            "ulist",
            LIST_PRIORITY,
            Box::new(ListContinuation::new(ListKind::Unordered, tab_length)),
        );
    }
}
