//! Lexer error types.
//!
//! Only malformed input is an error. Unknown ASCII bytes are reported as
//! `Illegal` tokens instead, and calling the scanner after end-of-input is a
//! panic, not an error value.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// A byte above `0x7F` at zero-based offset `pos`.
    #[error("lexer: invalid ASCII byte {byte:#04X} at byte {pos}")]
    InvalidAscii { byte: u8, pos: usize },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn pos(&self) -> usize {
        match self {
            LexError::InvalidAscii { pos, .. } => *pos,
        }
    }

    /// The offending byte.
    pub fn byte(&self) -> u8 {
        match self {
            LexError::InvalidAscii { byte, .. } => *byte,
        }
    }
}
