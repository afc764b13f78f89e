//! @acp:module "String Cursor"
//! @acp:summary "Forward-only scanner shared by the descriptor and link parsers"
//! @acp:domain cli
//! @acp:layer utility

/// Forward-only cursor over a string slice. Positions are byte offsets.
#[derive(Debug, Clone)]
pub(crate) struct StringCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> StringCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is the next character
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the remaining input starts with it
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Byte offset of the next occurrence of any of `chars`, relative to the
    /// current position
    pub fn find_any(&self, chars: &[char]) -> Option<usize> {
        self.rest().find(|c: char| chars.contains(&c))
    }

    /// Return the next `len` bytes and advance past them
    pub fn take(&mut self, len: usize) -> &'a str {
        let end = (self.pos + len).min(self.input.len());
        let taken = &self.input[self.pos..end];
        self.pos = end;
        taken
    }

    /// Consume everything up to (not including) the first of `chars`, or to
    /// the end of input
    pub fn take_until_any(&mut self, chars: &[char]) -> &'a str {
        let len = self.find_any(chars).unwrap_or(self.rest().len());
        self.take(len)
    }

    pub fn take_rest(&mut self) -> &'a str {
        let len = self.rest().len();
        self.take(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_until_stops_before_delimiter() {
        let mut cursor = StringCursor::new("a/b/C;->foo");
        assert_eq!(cursor.take_until_any(&[';']), "a/b/C");
        assert_eq!(cursor.position(), 5);
        assert!(cursor.eat(';'));
        assert!(cursor.eat_str("->"));
        assert_eq!(cursor.take_rest(), "foo");
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn test_take_until_without_delimiter_consumes_all() {
        let mut cursor = StringCursor::new("foo");
        assert_eq!(cursor.take_until_any(&['(', ':']), "foo");
        assert!(cursor.is_eof());
    }
}
