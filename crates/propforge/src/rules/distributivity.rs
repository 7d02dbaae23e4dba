//! Distributivity, both directions

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a & (b | c)` rewrites to `(a & b) | (a & c)`
pub struct DistributivityAnd;

impl TransformRule for DistributivityAnd {
    fn name(&self) -> &'static str {
        "Distributivity(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Distr
    }

    fn description(&self) -> &'static str {
        "a & (b | c) <=> (a & b) | (a & c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::And, _, right)
                if matches!(right.as_ref(), Expr::Binary(BinaryOp::Or, _, _))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let Expr::Binary(BinaryOp::Or, b, c) = right.as_ref() {
                return Ok(Expr::or(
                    Expr::and((**left).clone(), (**b).clone()),
                    Expr::and((**left).clone(), (**c).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a | (b & c)` rewrites to `(a | b) & (a | c)`
pub struct DistributivityOr;

impl TransformRule for DistributivityOr {
    fn name(&self) -> &'static str {
        "Distributivity(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Distr
    }

    fn description(&self) -> &'static str {
        "a | (b & c) <=> (a | b) & (a | c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::Or, _, right)
                if matches!(right.as_ref(), Expr::Binary(BinaryOp::And, _, _))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let Expr::Binary(BinaryOp::And, b, c) = right.as_ref() {
                return Ok(Expr::and(
                    Expr::or((**left).clone(), (**b).clone()),
                    Expr::or((**left).clone(), (**c).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `(a & b) | (a & c)` factors to `a & (b | c)` when the left conjuncts
/// match structurally
pub struct DistributivityAndReverse;

impl TransformRule for DistributivityAndReverse {
    fn name(&self) -> &'static str {
        "DistributivityReverse(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Distr
    }

    fn description(&self) -> &'static str {
        "(a & b) | (a & c) <=> a & (b | c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::And, a1, _),
                Expr::Binary(BinaryOp::And, a2, _),
            ) = (left.as_ref(), right.as_ref())
            {
                return a1 == a2;
            }
        }
        false
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::And, a1, b),
                Expr::Binary(BinaryOp::And, a2, c),
            ) = (left.as_ref(), right.as_ref())
            {
                if a1 == a2 {
                    return Ok(Expr::and(
                        (**a1).clone(),
                        Expr::or((**b).clone(), (**c).clone()),
                    ));
                }
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `(a | b) & (a | c)` factors to `a | (b & c)` when the left disjuncts
/// match structurally
pub struct DistributivityOrReverse;

impl TransformRule for DistributivityOrReverse {
    fn name(&self) -> &'static str {
        "DistributivityReverse(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Distr
    }

    fn description(&self) -> &'static str {
        "(a | b) & (a | c) <=> a | (b & c)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::Or, a1, _),
                Expr::Binary(BinaryOp::Or, a2, _),
            ) = (left.as_ref(), right.as_ref())
            {
                return a1 == a2;
            }
        }
        false
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::Or, a1, b),
                Expr::Binary(BinaryOp::Or, a2, c),
            ) = (left.as_ref(), right.as_ref())
            {
                if a1 == a2 {
                    return Ok(Expr::or(
                        (**a1).clone(),
                        Expr::and((**b).clone(), (**c).clone()),
                    ));
                }
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}
