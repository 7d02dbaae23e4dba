//! Expression evaluation under a variable assignment

use crate::error::UnboundVariable;
use crate::logic::expr::{BinaryOp, Expr};
use std::collections::HashMap;

/// Map from variable names to truth values; must cover every variable of
/// the expression being evaluated
pub type Assignment = HashMap<String, bool>;

/// Evaluate `expr` under `assignment`
///
/// Implication evaluates as `!a | b`, biconditional as
/// `(a & b) | (!a & !b)`.
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> Result<bool, UnboundVariable> {
    match expr {
        Expr::Variable(name) => assignment
            .get(name)
            .copied()
            .ok_or_else(|| UnboundVariable { name: name.clone() }),
        Expr::True => Ok(true),
        Expr::False => Ok(false),
        Expr::Not(child) => Ok(!evaluate(child, assignment)?),
        Expr::Binary(op, left, right) => {
            let a = evaluate(left, assignment)?;
            let b = evaluate(right, assignment)?;
            Ok(match op {
                BinaryOp::And => a && b,
                BinaryOp::Or => a || b,
                BinaryOp::Imp => !a || b,
                BinaryOp::Iff => (a && b) || (!a && !b),
            })
        }
    }
}
