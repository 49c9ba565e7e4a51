use crate::tree::Element;

/// A matched inline span and what replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset just past the match.
    pub end: usize,
    pub replacement: Replacement,
}

/// The output of an inline rule: an optional node followed by an optional
/// literal string.
///
/// Rules like the `md5` marker return both: an empty tagged element and the
/// digest as trailing text. The trailing string is final and is not scanned
/// again. `Inline` children of `node` are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Replacement {
    pub node: Option<Element>,
    pub tail: Option<String>,
}

impl Replacement {
    pub fn node(el: Element) -> Self {
        Self {
            node: Some(el),
            tail: None,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self {
            node: None,
            tail: Some(s.into()),
        }
    }

    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }
}

/// An inline span rewriter.
pub trait InlineRule: Send + Sync {
    /// Finds the leftmost match in `text` starting at or after byte `from`.
    ///
    /// `from` is always a char boundary. Matches must be non-empty.
    fn find(&self, text: &str, from: usize) -> Option<InlineMatch>;
}
