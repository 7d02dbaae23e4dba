//! Double negation, excluded middle and contradiction

use super::{negation_of, RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `!!a` collapses to `a`
pub struct DoubleNegation;

impl TransformRule for DoubleNegation {
    fn name(&self) -> &'static str {
        "DoubleNegation"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Neg
    }

    fn description(&self) -> &'static str {
        "!!a <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Not(child) if matches!(child.as_ref(), Expr::Not(_)))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Not(child) = expr {
            if let Expr::Not(inner) = child.as_ref() {
                return Ok((**inner).clone());
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a | !a` and `!a | a` rewrite to `true`
pub struct ExcludedMiddle;

impl TransformRule for ExcludedMiddle {
    fn name(&self) -> &'static str {
        "ExcludedMiddle"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Lem
    }

    fn description(&self) -> &'static str {
        "a | !a <=> true"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::Or, left, right) => {
                negation_of(right, left) || negation_of(left, right)
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::True);
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a & !a` and `!a & a` rewrite to `false`
pub struct Contradiction;

impl TransformRule for Contradiction {
    fn name(&self) -> &'static str {
        "Contradiction"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Contr
    }

    fn description(&self) -> &'static str {
        "a & !a <=> false"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::And, left, right) => {
                negation_of(right, left) || negation_of(left, right)
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::False);
        }
        Err(RuleViolation::new(self.name()))
    }
}
