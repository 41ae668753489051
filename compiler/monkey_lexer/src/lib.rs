//! Scanner for Monkey source text.
//!
//! Converts an in-memory byte buffer into [`Token`]s, one per call to
//! [`Scanner::next_token`].
//!
//! # Contract
//!
//! - Input must be 7-bit ASCII. A byte above `0x7F` is reported as
//!   [`LexError::InvalidAscii`] and the scanner does not move past it.
//! - Bytes the language has no use for become [`TokenKind::Illegal`] tokens;
//!   scanning continues after them.
//! - The last token is always [`TokenKind::Eof`]. Asking for another token
//!   after that is a caller bug and panics.
//!
//! [`Scanner::tokens`] wraps the scanner in an iterator that honours the
//! contract for you.

mod cursor;
mod lex_error;
mod scanner;

pub use lex_error::LexError;
pub use monkey_ir::{Token, TokenKind};
pub use scanner::{Scanner, Tokens};

/// Scan `source` to completion.
///
/// Returns every token up to and including `Eof`, or the first
/// invalid-encoding error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::from(source).tokens().collect()
}
