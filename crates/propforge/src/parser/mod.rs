//! Expression parsing
//!
//! Three stages: the tokenizer normalizes the surface syntaxes to
//! canonical tokens, the parenthesizer makes precedence explicit, and a
//! recursive-descent constructor builds the AST.

pub mod ast;
pub mod parenthesize;
pub mod token;

pub use ast::construct_ast;
pub use parenthesize::parenthesize;
pub use token::{tokenize, Token};

use crate::error::ParseError;
use crate::logic::expr::Expr;

/// Parse free-form propositional syntax into an AST
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    let tokens = parenthesize(tokens)?;
    construct_ast(&tokens)
}
