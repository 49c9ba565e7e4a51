use regex::{Captures, Regex};

use crate::{
    parsing::inline::{InlineMatch, InlineRule, Replacement},
    tree::{Element, Node},
};

/// Inline link: `[text](href "title")` → `<a href title>`.
///
/// Link text stays pending so emphasis and custom syntax apply inside it.
pub struct Link {
    regex: Regex,
}

/// Inline image: `![alt](src "title")` → `<img src title alt />`.
pub struct Image {
    regex: Regex,
}

/// Angle-bracket autolink: `<https://example.com>`.
pub struct Autolink {
    regex: Regex,
}

/// Shared tail of link and image syntax: `(href "optional title")`.
const DESTINATION: &str = r#"\(\s*<?([^\s<>()]*)>?(?:\s+"([^"]*)")?\s*\)"#;

impl Link {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(&format!(r"\[([^\[\]]*)\]{DESTINATION}"))
                .expect("Invalid link regex"),
        }
    }
}

impl Image {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(&format!(r"!\[([^\[\]]*)\]{DESTINATION}"))
                .expect("Invalid image regex"),
        }
    }
}

impl Autolink {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"<((?i:https?|ftp)://[^<>\s]*)>").expect("Invalid autolink regex"),
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Autolink {
    fn default() -> Self {
        Self::new()
    }
}

fn span_of(caps: &Captures<'_>, replacement: Replacement) -> Option<InlineMatch> {
    let whole = caps.get(0)?;
    Some(InlineMatch {
        start: whole.start(),
        end: whole.end(),
        replacement,
    })
}

impl InlineRule for Link {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let mut a = Element::new("a").with_attr("href", caps.get(2)?.as_str());
        if let Some(title) = caps.get(3) {
            a.set_attr("title", title.as_str());
        }
        a.push(Node::inline(caps.get(1)?.as_str()));
        span_of(&caps, Replacement::node(a))
    }
}

impl InlineRule for Image {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let mut img = Element::new("img").with_attr("src", caps.get(2)?.as_str());
        if let Some(title) = caps.get(3) {
            img.set_attr("title", title.as_str());
        }
        img.set_attr("alt", caps.get(1)?.as_str());
        span_of(&caps, Replacement::node(img))
    }
}

impl InlineRule for Autolink {
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let url = caps.get(1)?.as_str();
        let a = Element::new("a")
            .with_attr("href", url)
            .with_child(Node::text(url));
        span_of(&caps, Replacement::node(a))
    }
}
