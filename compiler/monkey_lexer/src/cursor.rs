//! Forward-only cursor over a byte buffer.
//!
//! The cursor never moves backward and never moves past the end of the
//! buffer. Reads at or beyond the end return `0x00`, so one-byte lookahead
//! near the end needs no separate bounds check. Use [`Cursor::is_eof`] to
//! tell the end of input apart from an interior null byte.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position. Invariant: `pos <= buf.len()`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.buf.get(pos).copied().unwrap_or(0)
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, stopping at EOF.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the input.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes from `start` up to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position {}", self.pos);
        &self.buf[start..self.pos]
    }

    /// Advance while `pred` holds for the current byte and input remains.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(&b) = self.buf.get(self.pos) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip ASCII whitespace: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

/// The six ASCII whitespace bytes.
///
/// Differs from [`u8::is_ascii_whitespace`], which excludes vertical tab.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests;
