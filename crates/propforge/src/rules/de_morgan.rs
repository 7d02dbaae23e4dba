//! De Morgan's laws, both directions

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `!(a & b)` rewrites to `!a | !b`
pub struct DeMorganAnd;

impl TransformRule for DeMorganAnd {
    fn name(&self) -> &'static str {
        "DeMorgan(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dm
    }

    fn description(&self) -> &'static str {
        "!(a & b) <=> !a | !b"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Not(child) if matches!(child.as_ref(), Expr::Binary(BinaryOp::And, _, _)))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Not(child) = expr {
            if let Expr::Binary(BinaryOp::And, left, right) = child.as_ref() {
                return Ok(Expr::or(
                    Expr::not((**left).clone()),
                    Expr::not((**right).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `!(a | b)` rewrites to `!a & !b`
pub struct DeMorganOr;

impl TransformRule for DeMorganOr {
    fn name(&self) -> &'static str {
        "DeMorgan(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dm
    }

    fn description(&self) -> &'static str {
        "!(a | b) <=> !a & !b"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Not(child) if matches!(child.as_ref(), Expr::Binary(BinaryOp::Or, _, _)))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Not(child) = expr {
            if let Expr::Binary(BinaryOp::Or, left, right) = child.as_ref() {
                return Ok(Expr::and(
                    Expr::not((**left).clone()),
                    Expr::not((**right).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `!a | !b` rewrites to `!(a & b)`
pub struct DeMorganAndReverse;

impl TransformRule for DeMorganAndReverse {
    fn name(&self) -> &'static str {
        "DeMorganReverse(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dm
    }

    fn description(&self) -> &'static str {
        "!a | !b <=> !(a & b)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, right)
                if matches!(left.as_ref(), Expr::Not(_)) && matches!(right.as_ref(), Expr::Not(_))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let (Expr::Not(a), Expr::Not(b)) = (left.as_ref(), right.as_ref()) {
                return Ok(Expr::not(Expr::and((**a).clone(), (**b).clone())));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `!a & !b` rewrites to `!(a | b)`
pub struct DeMorganOrReverse;

impl TransformRule for DeMorganOrReverse {
    fn name(&self) -> &'static str {
        "DeMorganReverse(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dm
    }

    fn description(&self) -> &'static str {
        "!a & !b <=> !(a | b)"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::And, left, right)
                if matches!(left.as_ref(), Expr::Not(_)) && matches!(right.as_ref(), Expr::Not(_))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if let (Expr::Not(a), Expr::Not(b)) = (left.as_ref(), right.as_ref()) {
                return Ok(Expr::not(Expr::or((**a).clone(), (**b).clone())));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_conjunction_splits() {
        let rule = DeMorganAnd;
        let expr = Expr::not(Expr::and(Expr::var("P"), Expr::var("Q")));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::or(Expr::not(Expr::var("P")), Expr::not(Expr::var("Q")))
        );
    }

    #[test]
    fn negated_disjunction_splits() {
        let rule = DeMorganOr;
        let expr = Expr::not(Expr::or(Expr::var("P"), Expr::var("Q")));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::and(Expr::not(Expr::var("P")), Expr::not(Expr::var("Q")))
        );
    }

    #[test]
    fn reverse_directions_fold_negations_inward() {
        let or_of_nots = Expr::or(Expr::not(Expr::var("P")), Expr::not(Expr::var("Q")));
        assert_eq!(
            DeMorganAndReverse.apply(&or_of_nots).unwrap(),
            Expr::not(Expr::and(Expr::var("P"), Expr::var("Q")))
        );
        let and_of_nots = Expr::and(Expr::not(Expr::var("P")), Expr::not(Expr::var("Q")));
        assert_eq!(
            DeMorganOrReverse.apply(&and_of_nots).unwrap(),
            Expr::not(Expr::or(Expr::var("P"), Expr::var("Q")))
        );
    }

    #[test]
    fn reverse_needs_negations_on_both_sides() {
        let rule = DeMorganAndReverse;
        let half = Expr::or(Expr::not(Expr::var("P")), Expr::var("Q"));
        assert!(!rule.can_apply(&half));
        assert!(rule.apply(&half).is_err());
    }
}
