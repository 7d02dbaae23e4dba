//! Biconditional expansion and contraction

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a <=> b` rewrites to `(a => b) & (b => a)`
pub struct Equivalence;

impl TransformRule for Equivalence {
    fn name(&self) -> &'static str {
        "Equivalence"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Equiv
    }

    fn description(&self) -> &'static str {
        "a <=> b is (a => b) & (b => a)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Binary(BinaryOp::Iff, _, _))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Iff, left, right) = expr {
            return Ok(Expr::and(
                Expr::imp((**left).clone(), (**right).clone()),
                Expr::imp((**right).clone(), (**left).clone()),
            ));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `(a => b) & (b => a)` contracts to `a <=> b` when the implications
/// cross-match structurally
pub struct EquivalenceReverse;

impl TransformRule for EquivalenceReverse {
    fn name(&self) -> &'static str {
        "EquivalenceReverse"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Equiv
    }

    fn description(&self) -> &'static str {
        "(a => b) & (b => a) is a <=> b"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::Imp, a, b),
                Expr::Binary(BinaryOp::Imp, c, d),
            ) = (left.as_ref(), right.as_ref())
            {
                return a == d && b == c;
            }
        }
        false
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let (
                Expr::Binary(BinaryOp::Imp, a, b),
                Expr::Binary(BinaryOp::Imp, c, d),
            ) = (left.as_ref(), right.as_ref())
            {
                if a == d && b == c {
                    return Ok(Expr::iff((**a).clone(), (**b).clone()));
                }
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biconditional_expands_to_two_implications() {
        let rule = Equivalence;
        let expr = Expr::iff(Expr::var("P"), Expr::var("Q"));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::and(
                Expr::imp(Expr::var("P"), Expr::var("Q")),
                Expr::imp(Expr::var("Q"), Expr::var("P"))
            )
        );
    }

    #[test]
    fn cross_matched_implications_contract() {
        let rule = EquivalenceReverse;
        let expr = Expr::and(
            Expr::imp(Expr::var("P"), Expr::var("Q")),
            Expr::imp(Expr::var("Q"), Expr::var("P")),
        );
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::iff(Expr::var("P"), Expr::var("Q"))
        );
    }

    #[test]
    fn parallel_implications_do_not_contract() {
        let rule = EquivalenceReverse;
        let expr = Expr::and(
            Expr::imp(Expr::var("P"), Expr::var("Q")),
            Expr::imp(Expr::var("P"), Expr::var("Q")),
        );
        assert!(!rule.can_apply(&expr));
        assert!(rule.apply(&expr).is_err());
    }
}
