//! Commutativity and re-association rules

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a & b` rewrites to `b & a`
pub struct CommutativityAnd;

impl TransformRule for CommutativityAnd {
    fn name(&self) -> &'static str {
        "Commutativity(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CommAssoc
    }

    fn description(&self) -> &'static str {
        "a & b <=> b & a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Binary(BinaryOp::And, _, _))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            return Ok(Expr::and((**right).clone(), (**left).clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a | b` rewrites to `b | a`
pub struct CommutativityOr;

impl TransformRule for CommutativityOr {
    fn name(&self) -> &'static str {
        "Commutativity(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CommAssoc
    }

    fn description(&self) -> &'static str {
        "a | b <=> b | a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Binary(BinaryOp::Or, _, _))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            return Ok(Expr::or((**right).clone(), (**left).clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a <=> b` rewrites to `b <=> a`
pub struct CommutativityIff;

impl TransformRule for CommutativityIff {
    fn name(&self) -> &'static str {
        "Commutativity(IFF)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CommAssoc
    }

    fn description(&self) -> &'static str {
        "a <=> b is b <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Binary(BinaryOp::Iff, _, _))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Iff, left, right) = expr {
            return Ok(Expr::iff((**right).clone(), (**left).clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `(a & b) & c` re-associates to `b & (a & c)`
pub struct CommutativityAndAnd;

impl TransformRule for CommutativityAndAnd {
    fn name(&self) -> &'static str {
        "Commutativity(AND-AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CommAssoc
    }

    fn description(&self) -> &'static str {
        "(a & b) & c <=> b & (a & c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::And, left, _)
                if matches!(left.as_ref(), Expr::Binary(BinaryOp::And, _, _))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let Expr::Binary(BinaryOp::And, inner_left, inner_right) = left.as_ref() {
                return Ok(Expr::and(
                    (**inner_right).clone(),
                    Expr::and((**inner_left).clone(), (**right).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `(a | b) | c` re-associates to `b | (a | c)`
pub struct CommutativityOrOr;

impl TransformRule for CommutativityOrOr {
    fn name(&self) -> &'static str {
        "Commutativity(OR-OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CommAssoc
    }

    fn description(&self) -> &'static str {
        "(a | b) | c <=> b | (a | c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, _)
                if matches!(left.as_ref(), Expr::Binary(BinaryOp::Or, _, _))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let Expr::Binary(BinaryOp::Or, inner_left, inner_right) = left.as_ref() {
                return Ok(Expr::or(
                    (**inner_right).clone(),
                    Expr::or((**inner_left).clone(), (**right).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}
