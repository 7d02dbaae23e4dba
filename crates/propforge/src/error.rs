//! Error types for PropForge

use crate::logic::truth_table::MAX_TRUTH_TABLE_VARIABLES;
use thiserror::Error;

/// Errors raised while turning input text into an AST
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,

    /// `index` is a byte position when raised by the tokenizer and a token
    /// position when raised by the AST constructor.
    #[error("unexpected token `{lexeme}` at position {index}")]
    UnexpectedToken { index: usize, lexeme: String },

    #[error("missing closing parenthesis")]
    MissingClosingParen,

    #[error("missing operand for `{0}`")]
    MissingOperand(String),

    #[error("unbalanced parentheses")]
    UnbalancedParens,
}

/// The expression references a variable the assignment does not bind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("variable `{name}` has no value in the assignment")]
pub struct UnboundVariable {
    pub name: String,
}

/// A rule's `apply` was called on an expression its guard rejects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("rule `{rule}` applied to an expression it does not match")]
pub struct RuleViolation {
    pub rule: &'static str,
}

impl RuleViolation {
    pub fn new(rule: &'static str) -> Self {
        RuleViolation { rule }
    }
}

/// Truth-table generation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    #[error(
        "expression has {0} variables; truth tables support at most {max}",
        max = MAX_TRUTH_TABLE_VARIABLES
    )]
    TooManyVariables(usize),

    #[error(transparent)]
    Eval(#[from] UnboundVariable),
}
