//! AST node containers.
//!
//! These types hold what a parser builds from a token stream. They only read
//! a token's `kind` and `literal`; the lexer never depends on them.

use crate::Token;

/// Common behaviour of every AST node.
pub trait Node {
    /// Literal of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// Root of every AST.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    /// The first statement's literal, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    Let(LetStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Ident(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Ident(ident) => ident.token_literal(),
        }
    }
}

/// `let <name> = <value>;`
///
/// `value` is `None` until expression parsing exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identifier {
    /// The `Ident` token.
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier node, taking its value from the token's literal.
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}
