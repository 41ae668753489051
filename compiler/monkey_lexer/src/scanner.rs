//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Each call skips whitespace, checks for end of input, validates the
//! current byte as ASCII, then dispatches on it. Every arm advances the
//! cursor past exactly one token; the token's literal is the slice between
//! the start position and the new position. Position never moves backward,
//! so a full scan is linear in the input length.

use std::iter::FusedIterator;

use monkey_ir::{classify, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::LexError;

/// Panic message for the one caller bug the scanner detects.
const CALLED_AFTER_EOF: &str = "lexer: next_token called after EOF returned";

/// Single-owner cursor over an immutable input buffer.
///
/// Call [`next_token`](Self::next_token) until it returns an `Eof` token,
/// then drop the scanner.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Set once `Eof` has been handed out. Never cleared.
    terminated: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            terminated: false,
        }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once the `Eof` token has been returned.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Produce the next token.
    ///
    /// Returns [`LexError::InvalidAscii`] if the next non-whitespace byte is
    /// above `0x7F`. The scanner stays on that byte, so calling again reports
    /// the same error.
    ///
    /// # Panics
    ///
    /// Panics if called after a token of kind [`TokenKind::Eof`] has already
    /// been returned.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.terminated {
            panic!("{CALLED_AFTER_EOF}");
        }

        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            self.terminated = true;
            debug!(pos = self.cursor.pos(), "end of input");
            return Ok(Token::eof());
        }

        let start = self.cursor.pos();
        let byte = self.cursor.current();
        if !byte.is_ascii() {
            debug!(byte, pos = start, "invalid ASCII byte");
            return Err(LexError::InvalidAscii { byte, pos: start });
        }

        let kind = match byte {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            b'=' => self.one_or_two(TokenKind::Assign, b'=', TokenKind::Equal),
            b'!' => self.one_or_two(TokenKind::Bang, b'=', TokenKind::NotEqual),
            b'0'..=b'9' => self.integer(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            // Control characters, DEL, and unused punctuation.
            _ => self.single(TokenKind::Illegal),
        };

        let token = Token::new(kind, ascii_literal(self.cursor.slice_from(start)));
        trace!(kind = ?token.kind, pos = start, "token");
        Ok(token)
    }

    /// Wrap the scanner in an iterator that yields every token through
    /// `Eof`, or up to and including the first error, then stops.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // ─── Operators ────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Two-byte operator when the next byte is `second`, otherwise the
    /// one-byte prefix. The longer match always wins.
    fn one_or_two(&mut self, one: TokenKind, second: u8, two: TokenKind) -> TokenKind {
        if self.cursor.peek() == second {
            self.cursor.advance_n(2);
            two
        } else {
            self.cursor.advance();
            one
        }
    }

    // ─── Literals & Identifiers ───────────────────────────────────

    /// Maximal run of decimal digits. Kept as text; no value or overflow check.
    fn integer(&mut self) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        TokenKind::Int
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.advance(); // first byte already validated
        self.cursor.eat_while(is_ident_continue);
        // Identifier bytes are ASCII, so the UTF-8 check cannot fail.
        std::str::from_utf8(self.cursor.slice_from(start)).map_or(TokenKind::Ident, classify)
    }
}

impl<'a> From<&'a str> for Scanner<'a> {
    fn from(source: &'a str) -> Self {
        Scanner::new(source.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Scanner<'a> {
    fn from(input: &'a [u8]) -> Self {
        Scanner::new(input)
    }
}

/// Iterator over a scanner's tokens.
///
/// Yields `Ok` tokens through the final `Eof`, or a single `Err` for the
/// first invalid byte, and then `None` forever. Never calls
/// [`Scanner::next_token`] after `Eof`.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.scanner.next_token();
        self.done = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Returns `true` for a-z, A-Z, 0-9, and underscore.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Copy validated ASCII bytes into an owned literal.
fn ascii_literal(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
