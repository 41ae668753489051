//! Monkey IR - shared data types
//!
//! This crate contains the data structures passed between compiler stages:
//! - Tokens and token kinds produced by the lexer
//! - Reserved keyword classification
//! - AST node containers consumed by a parser
//!
//! Nothing here performs I/O or holds mutable state. Keyword lookup is a
//! pure function over a fixed table.

pub mod ast;
mod keywords;
mod token;

pub use keywords::classify;
pub use token::{Token, TokenKind};
