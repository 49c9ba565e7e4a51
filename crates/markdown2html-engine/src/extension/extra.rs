use crate::parsing::{
    Markdown,
    blocks::kinds::{FencedCode, Table},
};

use super::Extension;

/// Fenced code blocks and pipe tables.
pub struct ExtraExtension;

impl Extension for ExtraExtension {
    fn name(&self) -> &'static str {
        "extra"
    }

    fn extend(&self, md: &mut Markdown) {
        let blocks = md.block_rules_mut();
        blocks.register("fenced_code", 85, Box::new(FencedCode));
        blocks.register("table", 75, Box::new(Table::new()));
    }
}
