use std::sync::OnceLock;

use regex::Regex;

use super::{Element, Node};

/// Elements written as `<tag />` with no closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Serializes the children of `root` as an HTML fragment.
///
/// The root element itself is not written, and surrounding whitespace is
/// trimmed.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    for child in &root.children {
        write_node(&mut out, child, false);
    }
    out.trim().to_string()
}

fn write_node(out: &mut String, node: &Node, in_code: bool) {
    match node {
        Node::Element(el) => write_element(out, el, in_code),
        Node::Text(text) | Node::Inline(text) if in_code => {
            out.push_str(&html_escape::encode_text(text));
        }
        Node::Text(text) | Node::Inline(text) => escape_text_into(out, text),
    }
}

fn write_element(out: &mut String, el: &Element, in_code: bool) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }

    if VOID_TAGS.contains(&el.tag.as_str()) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    let in_code = in_code || el.tag == "code";
    for child in &el.children {
        write_node(out, child, in_code);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Escapes `&`, `<` and `>`, leaving existing character references intact.
fn escape_text_into(out: &mut String, text: &str) {
    static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    let entity_regex = ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);")
            .expect("Invalid entity regex")
    });

    let mut last = 0;
    for m in entity_regex.find_iter(text) {
        out.push_str(&html_escape::encode_text(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&html_escape::encode_text(&text[last..]));
}
