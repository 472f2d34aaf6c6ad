//! Bounds-checked scanning window over the input bytes.

/// A `[pos, end)` window into a byte slice.
///
/// `Cursor` is `Copy`, so a snapshot is just a copy; restoring one undoes
/// everything a failed sub-parse consumed.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

/// ASCII whitespace, including vertical tab.
#[must_use]
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Current offset from the start of the underlying input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Returns the byte under the cursor, or 0 at the end.
    #[must_use]
    pub fn peek(&self) -> u8 {
        if self.at_end() { 0 } else { self.data[self.pos] }
    }

    /// Returns the rest of the window.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        if self.at_end() {
            &[]
        } else {
            &self.data[self.pos..self.end]
        }
    }

    /// Moves forward by `n` bytes, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.end);
    }

    /// Moves back by one byte.
    pub fn unget(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Consumes `c` if it is the next byte.
    pub fn eat(&mut self, c: u8) -> bool {
        if !self.at_end() && self.data[self.pos] == c {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skips leading whitespace. Returns whether anything is left.
    pub fn skip_spaces(&mut self) -> bool {
        while !self.at_end() && is_space(self.data[self.pos]) {
            self.pos += 1;
        }
        !self.at_end()
    }

    /// Retracts the end past trailing whitespace. Returns whether anything is left.
    pub fn strip_trailing_spaces(&mut self) -> bool {
        while !self.at_end() && is_space(self.data[self.end - 1]) {
            self.end -= 1;
        }
        !self.at_end()
    }

    /// Advances to the first `sep`, or to the end. Returns whether `sep` was found.
    pub fn skip_until(&mut self, sep: u8) -> bool {
        while !self.at_end() && self.data[self.pos] != sep {
            self.pos += 1;
        }
        !self.at_end()
    }

    /// Advances past bytes matching `pred`, returning them.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while !self.at_end() && pred(self.data[self.pos]) {
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    /// Returns a window covering `[self.pos, other.pos)`.
    #[must_use]
    pub fn until(&self, other: &Cursor<'a>) -> Cursor<'a> {
        Cursor {
            data: self.data,
            pos: self.pos,
            end: other.pos.clamp(self.pos, self.end),
        }
    }

    /// Returns whether every byte left satisfies `check`.
    #[must_use]
    pub fn all(&self, check: impl Fn(u8) -> bool) -> bool {
        self.remaining().iter().all(|&c| check(c))
    }

    /// Returns whether the rest of the window starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix.as_bytes())
    }
}
