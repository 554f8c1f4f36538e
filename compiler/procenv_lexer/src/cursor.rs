//! Forward-only cursor over declaration source text.
//!
//! Positions are byte offsets that always sit on a `char` boundary. The
//! delimiter searches (`eat_until_byte`, `eat_past`) jump with `memchr`;
//! every delimiter they look for is ASCII, so the landing position is a
//! boundary too.

use memchr::memmem;

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move past the current character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Move past `n` ASCII bytes the caller has already matched.
    #[inline]
    pub fn advance_ascii(&mut self, n: usize) {
        debug_assert!(self.rest().as_bytes().iter().take(n).all(u8::is_ascii));
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Consume characters while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.pos += len;
    }

    /// Consume Unicode whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Advance to the next occurrence of `byte`, leaving it unconsumed.
    ///
    /// Returns `false` (and moves to end of input) if there is none.
    pub fn eat_until_byte(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii());
        match memchr::memchr(byte, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    /// Advance past the next occurrence of `needle`, consuming it.
    ///
    /// Returns `false` (and moves to end of input) if there is none.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memmem::find(self.rest().as_bytes(), needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    /// Source text between two positions.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests;
