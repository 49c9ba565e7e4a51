//! # Parsing
//!
//! The conversion pipeline and the rule tables that drive it.
//!
//! ## Pipeline
//!
//! 1. [`blocks::normalize`] line endings, tabs and blank lines
//! 2. [`blocks::split_blocks`] on blank lines
//! 3. [`blocks::BlockParser`] runs the block table into a root element
//! 4. [`crate::tree::prettify`] lays block-level children out on their own lines
//! 5. [`inline::InlineParser`] expands every pending inline text node
//! 6. [`crate::tree::to_html`] writes the fragment
//!
//! Both tables are [`registry::Registry`] values owned by [`Markdown`].
//! Extensions add or replace entries by name before any conversion runs.

pub mod blocks;
pub mod inline;
pub mod registry;

use crate::{
    extension::{Extension, custom::CustomExtension, extra::ExtraExtension},
    options::Options,
    tree::{Element, prettify, to_html},
};

use blocks::{
    BlockParser, BlockRule,
    kinds::{
        BlockQuote, HashHeader, HorizontalRule, IndentedCode, List, ListIndent, ListKind,
        Paragraph, SetextHeader,
    },
    normalize,
};
use inline::{
    InlineParser, InlineRule,
    kinds::{Autolink, CodeSpan, Emphasis, Escape, Image, LineBreak, Link, Strong, UnderscoreEmphasis},
};
use registry::Registry;

/// A configured Markdown converter.
///
/// Conversion takes `&self`; one instance converts any number of documents.
pub struct Markdown {
    block_rules: Registry<Box<dyn BlockRule>>,
    inline_rules: Registry<Box<dyn InlineRule>>,
    tab_length: usize,
}

impl Markdown {
    pub fn new(options: &Options) -> Self {
        let tab_length = options.tab_length.max(1);
        let mut md = Self {
            block_rules: base_block_rules(tab_length),
            inline_rules: base_inline_rules(),
            tab_length,
        };

        if options.extra {
            md.register_extension(&ExtraExtension);
        }
        if options.custom_syntax {
            md.register_extension(&CustomExtension);
        }
        md
    }

    pub fn register_extension(&mut self, extension: &dyn Extension) {
        log::debug!("registering extension `{}`", extension.name());
        extension.extend(self);
    }

    pub fn block_rules(&self) -> &Registry<Box<dyn BlockRule>> {
        &self.block_rules
    }

    pub fn block_rules_mut(&mut self) -> &mut Registry<Box<dyn BlockRule>> {
        &mut self.block_rules
    }

    pub fn inline_rules(&self) -> &Registry<Box<dyn InlineRule>> {
        &self.inline_rules
    }

    pub fn inline_rules_mut(&mut self) -> &mut Registry<Box<dyn InlineRule>> {
        &mut self.inline_rules
    }

    pub fn tab_length(&self) -> usize {
        self.tab_length
    }

    /// Parses `text` into a finished element tree rooted at a `div`.
    pub fn parse(&self, text: &str) -> Element {
        let text = normalize(text, self.tab_length);
        let mut root = Element::new("div");

        BlockParser::new(&self.block_rules, self.tab_length)
            .with_fenced_blocks(self.block_rules.contains("fenced_code"))
            .parse_chunk(&mut root, &text);
        prettify(&mut root);
        InlineParser::new(&self.inline_rules).expand(&mut root);

        root
    }

    /// Converts `text` to an HTML fragment.
    pub fn convert(&self, text: &str) -> String {
        to_html(&self.parse(text))
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

/// Converts `text` with default options.
pub fn markdown_to_html(text: &str) -> String {
    Markdown::default().convert(text)
}

fn base_block_rules(tab_length: usize) -> Registry<Box<dyn BlockRule>> {
    let mut rules: Registry<Box<dyn BlockRule>> = Registry::new();
    rules.register("list_indent", 90, Box::new(ListIndent::new(tab_length)));
    rules.register("indented_code", 80, Box::new(IndentedCode::new(tab_length)));
    rules.register("hash_header", 70, Box::new(HashHeader::new()));
    rules.register("setext_header", 60, Box::new(SetextHeader::new()));
    rules.register("hr", 50, Box::new(HorizontalRule::new()));
    rules.register("olist", 40, Box::new(List::new(ListKind::Ordered, tab_length)));
    rules.register("ulist", 30, Box::new(List::new(ListKind::Unordered, tab_length)));
    rules.register("quote", 20, Box::new(BlockQuote));
    rules.register("paragraph", 10, Box::new(Paragraph));
    rules
}

fn base_inline_rules() -> Registry<Box<dyn InlineRule>> {
    let mut rules: Registry<Box<dyn InlineRule>> = Registry::new();
    rules.register("backtick", 190, Box::new(CodeSpan));
    rules.register("escape", 180, Box::new(Escape::new()));
    rules.register("link", 160, Box::new(Link::new()));
    rules.register("image", 150, Box::new(Image::new()));
    rules.register("autolink", 120, Box::new(Autolink::new()));
    rules.register("strong", 70, Box::new(Strong::asterisk()));
    rules.register("strong_underscore", 70, Box::new(Strong::underscore()));
    rules.register("emphasis", 60, Box::new(Emphasis::asterisk()));
    rules.register("emphasis_underscore", 50, Box::new(UnderscoreEmphasis::new()));
    rules.register("linebreak", 10, Box::new(LineBreak::new()));
    rules
}
