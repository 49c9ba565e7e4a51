//! # Element Tree
//!
//! The output model shared by the block and inline layers.
//!
//! Block rules build [`Element`]s and leave their text as [`Node::Inline`];
//! the inline pass later replaces every `Inline` with final [`Node::Text`]
//! and inline elements. [`serialize::to_html`] turns the finished tree into
//! an HTML fragment.

pub mod prettify;
pub mod serialize;

pub use prettify::prettify;
pub use serialize::to_html;

/// Tags the serializer and prettifier treat as block-level.
pub const BLOCK_LEVEL_TAGS: &[&str] = &[
    "address",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Returns true if `tag` is a block-level HTML element.
pub fn is_block_level(tag: &str) -> bool {
    BLOCK_LEVEL_TAGS.contains(&tag)
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tagged element with attributes and children.
    Element(Element),
    /// Final text. Escaped on output, never scanned for inline syntax.
    Text(String),
    /// Source text awaiting the inline pass.
    Inline(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn inline(s: impl Into<String>) -> Self {
        Node::Inline(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An output markup element.
///
/// Attributes keep insertion order so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`Element::push`].
    #[must_use]
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Sets an attribute, replacing any existing value under the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// The last child, if it is an element.
    pub fn last_element(&self) -> Option<&Element> {
        self.children.last().and_then(Node::as_element)
    }

    pub fn last_element_mut(&mut self) -> Option<&mut Element> {
        match self.children.last_mut() {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Appends `el` and returns a mutable reference to it in place.
    pub fn append(&mut self, el: Element) -> &mut Element {
        self.children.push(Node::Element(el));
        match self.children.last_mut() {
            Some(Node::Element(el)) => el,
            _ => unreachable!("element was just pushed"),
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn is_block_level(&self) -> bool {
        is_block_level(&self.tag)
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Element(child) => collect_text(child, out),
            Node::Text(t) | Node::Inline(t) => out.push_str(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::new("p").with_attr("class", "a");
        el.set_attr("class", "b");
        assert_eq!(el.attrs, vec![("class".to_string(), "b".to_string())]);
        assert_eq!(el.attr("class"), Some("b"));
        assert_eq!(el.attr("id"), None);
    }

    #[test]
    fn last_element_ignores_trailing_text() {
        let el = Element::new("li")
            .with_child(Element::new("ul"))
            .with_child(Node::inline("tail"));
        assert!(el.last_element().is_none());
    }

    #[test]
    fn append_returns_the_pushed_element() {
        let mut root = Element::new("div");
        root.append(Element::new("ul")).push(Element::new("li"));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.last_element().map(|ul| ul.children.len()), Some(1));
    }

    #[test]
    fn text_content_walks_descendants() {
        let el = Element::new("p")
            .with_child(Node::text("a "))
            .with_child(Element::new("b").with_child(Node::inline("b")))
            .with_child(Node::text(" c"));
        assert_eq!(el.text_content(), "a b c");
    }

    #[test]
    fn block_level_tags() {
        assert!(is_block_level("p"));
        assert!(is_block_level("blockquote"));
        assert!(!is_block_level("b"));
        assert!(!is_block_level("code"));
    }
}
