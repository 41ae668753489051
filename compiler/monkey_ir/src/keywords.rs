//! Reserved keyword classification.
//!
//! Monkey has seven reserved words. Lookup uses the identifier's length as a
//! first-pass filter (keywords are 2-6 chars), then matches the specific
//! words of that length.

use crate::TokenKind;

/// Classify identifier-shaped text as a keyword or a plain identifier.
///
/// Returns the dedicated kind when `text` exactly matches a reserved word
/// (`fn`, `let`, `return`, `if`, `else`, `true`, `false`), otherwise
/// [`TokenKind::Ident`]. Total and pure: any string is accepted and the same
/// string always yields the same kind.
#[inline]
pub fn classify(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "fn" => TokenKind::Function,
            "if" => TokenKind::If,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "let" => TokenKind::Let,
            _ => TokenKind::Ident,
        },
        4 => match text {
            "else" => TokenKind::Else,
            "true" => TokenKind::True,
            _ => TokenKind::Ident,
        },
        5 => match text {
            "false" => TokenKind::False,
            _ => TokenKind::Ident,
        },
        6 => match text {
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
