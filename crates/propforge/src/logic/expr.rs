//! Propositional expressions
//!
//! `Expr` is the tagged tree the whole crate pattern-matches on. Trees own
//! their children exclusively; rewrites never mutate in place, they
//! allocate fresh trees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Binary connective of a compound expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    And,
    Or,
    Imp,
    Iff,
}

impl BinaryOp {
    /// Symbol used in the canonical text form
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Imp => "=>",
            BinaryOp::Iff => "<=>",
        }
    }

    /// Tag used in structural fingerprints
    pub fn tag(&self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Imp => "IMP",
            BinaryOp::Iff => "IFF",
        }
    }
}

/// A propositional expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Variable(String),
    True,
    False,
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryOp::And, Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryOp::Or, Box::new(left), Box::new(right))
    }

    pub fn imp(left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryOp::Imp, Box::new(left), Box::new(right))
    }

    pub fn iff(left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryOp::Iff, Box::new(left), Box::new(right))
    }

    /// Node count: variables, constants and operators each count one
    pub fn size(&self) -> usize {
        match self {
            Expr::Variable(_) | Expr::True | Expr::False => 1,
            Expr::Not(child) => 1 + child.size(),
            Expr::Binary(_, left, right) => 1 + left.size() + right.size(),
        }
    }

    /// Set of variable names in the subtree, ordered ascending
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Expr::Variable(name) => {
                vars.insert(name.clone());
            }
            Expr::True | Expr::False => {}
            Expr::Not(child) => child.collect_variables(vars),
            Expr::Binary(_, left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }

    /// Deterministic structural hash, built bottom-up
    ///
    /// Injective over the tree shape, so fingerprint equality is exactly
    /// structural equality. The proof search keys its visited set on it.
    pub fn fingerprint(&self) -> String {
        let mut out = String::with_capacity(self.size() * 8);
        self.write_fingerprint(&mut out);
        out
    }

    fn write_fingerprint(&self, out: &mut String) {
        match self {
            Expr::Variable(name) => {
                out.push_str("VAR(");
                out.push_str(name);
                out.push(')');
            }
            Expr::True => out.push_str("TRUE"),
            Expr::False => out.push_str("FALSE"),
            Expr::Not(child) => {
                out.push_str("NOT(");
                child.write_fingerprint(out);
                out.push(')');
            }
            Expr::Binary(op, left, right) => {
                out.push_str(op.tag());
                out.push('(');
                left.write_fingerprint(out);
                out.push(',');
                right.write_fingerprint(out);
                out.push(')');
            }
        }
    }
}

// Canonical text form: negations of atoms and of other negations print
// bare, negated binaries get parentheses, and a binary operand is
// parenthesized exactly when it is itself a binary.

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::True => write!(f, "true"),
            Expr::False => write!(f, "false"),
            Expr::Not(child) => match child.as_ref() {
                Expr::Binary(..) => write!(f, "!({})", child),
                _ => write!(f, "!{}", child),
            },
            Expr::Binary(op, left, right) => {
                fmt_operand(left, f)?;
                write!(f, " {} ", op.symbol())?;
                fmt_operand(right, f)
            }
        }
    }
}

fn fmt_operand(operand: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if matches!(operand, Expr::Binary(..)) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}
