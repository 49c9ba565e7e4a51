use super::{Element, Node, is_block_level};

/// Inserts newline text around block-level children so the serialized HTML
/// puts each block on its own line.
///
/// Runs after block parsing and before the inline pass, so elements produced
/// by inline rules (such as the `md5` marker) are left untouched.
/// `pre` and `code` contents are never modified.
pub fn prettify(el: &mut Element) {
    if !el.is_block_level() || matches!(el.tag.as_str(), "pre" | "code") {
        return;
    }

    let children = std::mem::take(&mut el.children);
    let mut out = Vec::with_capacity(children.len() * 2 + 1);

    if matches!(children.first(), Some(Node::Element(first)) if first.is_block_level()) {
        out.push(Node::text("\n"));
    }

    let mut iter = children.into_iter().peekable();
    while let Some(node) = iter.next() {
        match node {
            Node::Element(mut child) if is_block_level(&child.tag) => {
                prettify(&mut child);
                let followed_by_text = matches!(
                    iter.peek(),
                    Some(Node::Text(t) | Node::Inline(t)) if !t.trim().is_empty()
                );
                out.push(Node::Element(child));
                if !followed_by_text {
                    out.push(Node::text("\n"));
                }
            }
            other => out.push(other),
        }
    }

    el.children = out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn newline_after_each_block_child() {
        let mut root = Element::new("div")
            .with_child(Element::new("p").with_child(Node::inline("a")))
            .with_child(Element::new("hr"));
        prettify(&mut root);
        assert_eq!(
            root.children,
            vec![
                Node::text("\n"),
                Element::new("p").with_child(Node::inline("a")).into(),
                Node::text("\n"),
                Element::new("hr").into(),
                Node::text("\n"),
            ]
        );
    }

    #[test]
    fn no_leading_newline_when_text_comes_first() {
        let mut li = Element::new("li")
            .with_child(Node::inline("item"))
            .with_child(Element::new("ul"));
        prettify(&mut li);
        assert_eq!(
            li.children,
            vec![
                Node::inline("item"),
                Element::new("ul").into(),
                Node::text("\n"),
            ]
        );
    }

    #[test]
    fn block_child_followed_by_text_keeps_its_tail() {
        let mut p = Element::new("div")
            .with_child(Element::new("p"))
            .with_child(Node::text("tail"));
        prettify(&mut p);
        assert_eq!(p.children.len(), 3);
        assert_eq!(p.children[2], Node::text("tail"));
    }

    #[test]
    fn pre_is_left_alone() {
        let code = Element::new("code").with_child(Node::text("x\n"));
        let mut pre = Element::new("pre").with_child(code.clone());
        prettify(&mut pre);
        assert_eq!(pre.children, vec![Node::Element(code)]);
    }

    #[test]
    fn inline_elements_are_not_prettified() {
        let mut b = Element::new("b").with_child(Element::new("p"));
        prettify(&mut b);
        assert_eq!(b.children, vec![Node::Element(Element::new("p"))]);
    }
}
