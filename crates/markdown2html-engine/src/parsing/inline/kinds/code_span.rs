use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement, cursor::Cursor},
    tree::{Element, Node},
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content becomes final text, so no other
/// inline rule fires inside them. An opening run of N backticks closes only
/// on a run of exactly N.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

impl InlineRule for CodeSpan {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let mut cur = Cursor::new(text, from);

        loop {
            if !cur.skip_until(Self::TICK) {
                return None;
            }
            let start = cur.pos();
            let open = cur.eat_run(Self::TICK);
            let inner_start = cur.pos();

            let mut scan = cur.clone();
            while scan.skip_until(Self::TICK) {
                let inner_end = scan.pos();
                if scan.eat_run(Self::TICK) == open {
                    let code = text[inner_start..inner_end].trim();
                    return Some(InlineMatch {
                        start,
                        end: scan.pos(),
                        replacement: Replacement::node(
                            Element::new("code").with_child(Node::text(code)),
                        ),
                    });
                }
            }
            // Unclosed run: it stays literal, keep looking after it.
        }
    }
}
