//! Idempotence, both directions
//!
//! The reverse directions grow the expression on every application; the
//! search only terminates because the driver's length budget gates them.

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a & a` and `a | a` collapse to `a`
pub struct Idempotence;

impl TransformRule for Idempotence {
    fn name(&self) -> &'static str {
        "Idempotence"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Idemp
    }

    fn description(&self) -> &'static str {
        "a & a <=> a | a <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::And | BinaryOp::Or, left, right) if left == right
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And | BinaryOp::Or, left, right) = expr {
            if left == right {
                return Ok((**left).clone());
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a` expands to `a & a`; skipped when the expression already has that
/// shape
pub struct IdempotenceReverseAnd;

impl TransformRule for IdempotenceReverseAnd {
    fn name(&self) -> &'static str {
        "IdempotenceReverse(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Idemp
    }

    fn description(&self) -> &'static str {
        "a <=> a & a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        !matches!(
            expr,
            Expr::Binary(BinaryOp::And, left, right) if left == right
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::and(expr.clone(), expr.clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a` expands to `a | a`; skipped when the expression already has that
/// shape
pub struct IdempotenceReverseOr;

impl TransformRule for IdempotenceReverseOr {
    fn name(&self) -> &'static str {
        "IdempotenceReverse(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Idemp
    }

    fn description(&self) -> &'static str {
        "a <=> a | a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        !matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, right) if left == right
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::or(expr.clone(), expr.clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}
