//! Token types for the Monkey lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text that produced
//! it. The literal is owned, so tokens stay valid after the scanner that
//! produced them has moved on or been dropped.

use std::fmt;

/// A classified lexical unit with its source text.
///
/// `literal` is empty only for [`TokenKind::Eof`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token (empty literal).
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}

/// Token kinds for Monkey.
///
/// The set is closed: every byte sequence the scanner accepts maps to exactly
/// one of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A single byte the language has no use for.
    Illegal,
    /// End of input. Always the last token of a scan.
    Eof,

    /// Identifier: `add`, `foo_bar`, `x1`
    Ident,
    /// Integer literal, kept as raw digit text: `5`, `1000`
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Slash,    // /
    Asterisk, // *
    Bang,     // !
    Less,     // <
    Greater,  // >
    Equal,    // ==
    NotEqual, // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function, // fn
    Let,
    Return,
    If,
    Else,
    True,
    False,
}

impl TokenKind {
    /// Stable, human-readable name used when rendering token streams.
    ///
    /// Operators and delimiters render as their source text; everything else
    /// as an upper-case tag.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Bang => "!",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }

    /// Returns `true` for the reserved-word kinds.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Source text for kinds whose literal never varies.
    ///
    /// Returns `None` for `Illegal`, `Eof`, `Ident`, and `Int`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Illegal | TokenKind::Eof | TokenKind::Ident | TokenKind::Int => None,
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::Return => Some("return"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            other => Some(other.name()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
