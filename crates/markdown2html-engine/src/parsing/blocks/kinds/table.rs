use std::collections::VecDeque;

use regex::Regex;

use crate::{
    parsing::blocks::{BlockParser, BlockRule},
    tree::{Element, Node},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn from_separator(cell: &str) -> Option<Self> {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Some(Align::Center),
            (true, false) => Some(Align::Left),
            (false, true) => Some(Align::Right),
            (false, false) => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Pipe tables: a header row, a separator row of dashes, then body rows.
///
/// The separator must have as many cells as the header. Body rows are padded
/// or truncated to the header width.
pub struct Table {
    separator: Regex,
}

impl Table {
    pub fn new() -> Self {
        Self {
            separator: Regex::new(r"^ {0,3}\|?[ ]*:?-+:?[ ]*(?:\|[ ]*:?-+:?[ ]*)*\|?[ ]*$")
                .expect("Invalid table separator regex"),
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRule for Table {
    fn test(&self, _parent: &Element, block: &str) -> bool {
        let mut lines = block.split('\n');
        let (Some(header), Some(separator)) = (lines.next(), lines.next()) else {
            return false;
        };
        header.contains('|')
            && self.separator.is_match(separator)
            && split_row(header).len() == split_row(separator).len()
    }

    fn run(&self, _parser: &BlockParser<'_>, parent: &mut Element, blocks: &mut VecDeque<String>) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let mut lines = block.split('\n');
        let (Some(header), Some(separator)) = (lines.next(), lines.next()) else {
            return;
        };

        let aligns: Vec<Option<Align>> = split_row(separator)
            .iter()
            .map(|cell| Align::from_separator(cell))
            .collect();

        let mut table = Element::new("table");
        table.push(Element::new("thead").with_child(build_row("th", &split_row(header), &aligns)));

        let mut body = Element::new("tbody");
        for line in lines {
            body.push(build_row("td", &split_row(line), &aligns));
        }
        table.push(body);
        parent.push(table);
    }
}

fn build_row(cell_tag: &str, cells: &[String], aligns: &[Option<Align>]) -> Element {
    let mut tr = Element::new("tr");
    for (i, align) in aligns.iter().enumerate() {
        let mut cell = Element::new(cell_tag);
        if let Some(align) = align {
            cell.set_attr("style", format!("text-align: {};", align.as_str()));
        }
        if let Some(text) = cells.get(i).filter(|t| !t.is_empty()) {
            cell.push(Node::inline(text.as_str()));
        }
        tr.push(cell);
    }
    tr
}

/// Splits a row on unescaped pipes, dropping the optional outer pipes.
fn split_row(line: &str) -> Vec<String> {
    let mut row = line.trim();
    row = row.strip_prefix('|').unwrap_or(row);
    if row.ends_with('|') && !row.ends_with("\\|") {
        row = &row[..row.len() - 1];
    }

    let mut cells = vec![];
    let mut current = String::new();
    let mut escaped = false;
    for c in row.chars() {
        match c {
            '|' if !escaped => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    cells.push(current);
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}
