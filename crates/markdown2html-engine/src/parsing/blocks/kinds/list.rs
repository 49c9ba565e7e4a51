use std::collections::VecDeque;

use regex::Regex;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

use super::dedent_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// One list item as split out of a block.
#[derive(Debug, Default)]
struct Item {
    /// The item's number without leading zeros, for ordered lists.
    number: Option<String>,
    lines: Vec<String>,
    /// Index into `lines` where an indented child block starts.
    child_from: Option<usize>,
}

/// Ordered or unordered lists.
///
/// Each marker line starts an item. Unmarked lines continue the current item;
/// lines indented by a tab stop are dedented, and the first indented line
/// that is itself a list item starts a nested child block. When a block
/// follows a list of the same kind, it extends that list and the list turns
/// loose: item text is wrapped in paragraphs.
pub struct List {
    kind: ListKind,
    tab_length: usize,
    item: Regex,
    any_item: Regex,
}

impl List {
    pub fn new(kind: ListKind, tab_length: usize) -> Self {
        let tab_length = tab_length.max(1);
        let indent = tab_length - 1;
        let item = match kind {
            ListKind::Ordered => format!(r"^[ ]{{0,{indent}}}(\d+)\.[ ]+(.*)$"),
            ListKind::Unordered => format!(r"^[ ]{{0,{indent}}}([*+-])[ ]+(.*)$"),
        };
        Self {
            kind,
            tab_length,
            item: Regex::new(&item).expect("Invalid list item regex"),
            any_item: Regex::new(&format!(r"^[ ]{{0,{indent}}}(?:\d+\.|[*+-])[ ]+"))
                .expect("Invalid list item regex"),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Item numbers stay as written, so any number of digits is accepted.
    fn start_number(digits: &str) -> String {
        match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }

    fn split_items(&self, block: &str) -> Vec<Item> {
        let indent = " ".repeat(self.tab_length);
        let mut items: Vec<Item> = vec![];

        for line in block.split('\n') {
            if let Some(caps) = self.item.captures(line) {
                let number = match self.kind {
                    ListKind::Ordered => Some(Self::start_number(&caps[1])),
                    ListKind::Unordered => None,
                };
                items.push(Item {
                    number,
                    lines: vec![caps[2].to_string()],
                    child_from: None,
                });
                continue;
            }

            let Some(item) = items.last_mut() else {
                items.push(Item {
                    lines: vec![line.to_string()],
                    ..Item::default()
                });
                continue;
            };
            match line.strip_prefix(indent.as_str()) {
                Some(nested) => {
                    if item.child_from.is_none() && self.any_item.is_match(nested) {
                        item.child_from = Some(item.lines.len());
                    }
                    item.lines.push(nested.to_string());
                }
                None => item.lines.push(line.to_string()),
            }
        }
        items
    }

    fn build_item(&self, parser: &BlockParser<'_>, item: &Item, loose: bool) -> Element {
        let mut li = Element::new("li");
        let split = item.child_from.unwrap_or(item.lines.len());

        let text = item.lines[..split].join("\n");
        if loose {
            parser.parse_chunk(&mut li, &text);
        } else {
            li.push(Node::inline(text));
        }

        if split < item.lines.len() {
            parser.parse_chunk(&mut li, &item.lines[split..].join("\n"));
        }
        li
    }
}

impl BlockRule for List {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        block
            .split('\n')
            .next()
            .is_some_and(|line| self.item.is_match(line))
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let items = self.split_items(&block);
        let tag = self.kind.tag();
        let continuing = parent.last_element().is_some_and(|el| el.tag == tag);

        if !continuing {
            let mut list = Element::new(tag);
            if let Some(start) = items.first().and_then(|i| i.number.as_deref())
                && start != "1"
            {
                list.set_attr("start", start);
            }
            parent.push(list);
        }

        let Some(list) = parent.last_element_mut() else {
            return;
        };
        if continuing && let Some(last) = list.last_element_mut() {
            make_loose(last);
        }
        for item in &items {
            list.push(self.build_item(parser, item, continuing));
        }
    }
}

/// Blocks indented by a tab stop right after a list belong to its last item.
pub struct ListIndent {
    tab_length: usize,
}

impl ListIndent {
    pub fn new(tab_length: usize) -> Self {
        Self {
            tab_length: tab_length.max(1),
        }
    }
}

impl BlockRule for ListIndent {
    fn test(&self, parent: &Element, block: &str) -> bool {
        block.starts_with(&" ".repeat(self.tab_length))
            && parent
                .last_element()
                .is_some_and(|el| matches!(el.tag.as_str(), "ul" | "ol"))
    }

    fn run(&self, parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let Some(list) = parent.last_element_mut() else {
            return;
        };
        if list.last_element().is_none_or(|el| el.tag != "li") {
            list.push(Element::new("li"));
        }
        let Some(li) = list.last_element_mut() else {
            return;
        };

        make_loose(li);
        parser.parse_chunk(li, &dedent_lines(&block, self.tab_length));
    }
}

/// Wraps an item's leading text in a paragraph.
fn make_loose(li: &mut Element) {
    let leading = li
        .children
        .iter()
        .take_while(|n| !matches!(n, Node::Element(_)))
        .count();
    if leading == 0 {
        return;
    }

    let mut p = Element::new("p");
    p.children = li.children.drain(..leading).collect();
    li.children.insert(0, p.into());
}
