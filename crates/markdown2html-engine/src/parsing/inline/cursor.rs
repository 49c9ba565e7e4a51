/// A byte cursor for hand-written inline scanners.
///
/// Positions are byte offsets into `s`. Scanners only stop on ASCII
/// delimiters, so every position they slice at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `s` positioned at `start`.
    pub fn new(s: &'a str, start: usize) -> Self {
        Self { s, i: start }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until the next occurrence of `b` or end of input.
    /// Returns true if `b` was found.
    pub fn skip_until(&mut self, b: u8) -> bool {
        while let Some(c) = self.peek() {
            if c == b {
                return true;
            }
            self.i += 1;
        }
        false
    }

    /// Consumes a run of `b` bytes and returns its length.
    pub fn eat_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.i += 1;
        }
        self.i - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 0);
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn starts_mid_string() {
        let cur = Cursor::new("abc", 2);
        assert_eq!(cur.peek(), Some(b'c'));
    }

    #[test]
    fn empty_string_input() {
        let mut cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn skip_until_stops_on_byte() {
        let mut cur = Cursor::new("ab`c", 0);
        assert!(cur.skip_until(b'`'));
        assert_eq!(cur.pos(), 2);
    }

    #[test]
    fn skip_until_reaches_eof() {
        let mut cur = Cursor::new("abc", 0);
        assert!(!cur.skip_until(b'`'));
        assert!(cur.eof());
    }

    #[test]
    fn eat_run_counts_repeats() {
        let mut cur = Cursor::new("```x", 0);
        assert_eq!(cur.eat_run(b'`'), 3);
        assert_eq!(cur.peek(), Some(b'x'));
        assert_eq!(cur.eat_run(b'`'), 0);
    }
}
