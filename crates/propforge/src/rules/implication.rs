//! Implication elimination and the contrapositive

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a => b` rewrites to `!a | b`
pub struct ImplicationElimination;

impl TransformRule for ImplicationElimination {
    fn name(&self) -> &'static str {
        "ImplicationElimination"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Impl
    }

    fn description(&self) -> &'static str {
        "a => b <=> !a | b"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Binary(BinaryOp::Imp, _, _))
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Imp, left, right) = expr {
            return Ok(Expr::or(Expr::not((**left).clone()), (**right).clone()));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `!a | b` rewrites to `a => b`; matches whenever the left operand is a
/// negation
pub struct ImplicationEliminationReverse;

impl TransformRule for ImplicationEliminationReverse {
    fn name(&self) -> &'static str {
        "ImplicationEliminationReverse"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Impl
    }

    fn description(&self) -> &'static str {
        "!a | b <=> a => b"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, _) if matches!(left.as_ref(), Expr::Not(_))
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if let Expr::Not(antecedent) = left.as_ref() {
                return Ok(Expr::imp((**antecedent).clone(), (**right).clone()));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a => b` rewrites to `!b => !a`; skipped when both sides are already
/// negated, which would only oscillate
pub struct Contrapositive;

impl TransformRule for Contrapositive {
    fn name(&self) -> &'static str {
        "Contrapositive"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Contrapos
    }

    fn description(&self) -> &'static str {
        "a => b <=> !b => !a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::Imp, left, right) => {
                !(matches!(left.as_ref(), Expr::Not(_)) && matches!(right.as_ref(), Expr::Not(_)))
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Imp, left, right) = expr {
            let both_negated = matches!(left.as_ref(), Expr::Not(_))
                && matches!(right.as_ref(), Expr::Not(_));
            if !both_negated {
                return Ok(Expr::imp(
                    Expr::not((**right).clone()),
                    Expr::not((**left).clone()),
                ));
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implication_becomes_disjunction() {
        let rule = ImplicationElimination;
        let expr = Expr::imp(Expr::var("P"), Expr::var("Q"));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::or(Expr::not(Expr::var("P")), Expr::var("Q"))
        );
    }

    #[test]
    fn negated_left_disjunct_becomes_implication() {
        let rule = ImplicationEliminationReverse;
        let expr = Expr::or(Expr::not(Expr::var("P")), Expr::var("Q"));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::imp(Expr::var("P"), Expr::var("Q"))
        );
        // Applies even when the right side is a negation too.
        let both = Expr::or(Expr::not(Expr::var("P")), Expr::not(Expr::var("Q")));
        assert_eq!(
            rule.apply(&both).unwrap(),
            Expr::imp(Expr::var("P"), Expr::not(Expr::var("Q")))
        );
        assert!(!rule.can_apply(&Expr::or(Expr::var("P"), Expr::var("Q"))));
    }

    #[test]
    fn contrapositive_flips_and_negates() {
        let rule = Contrapositive;
        let expr = Expr::imp(Expr::var("P"), Expr::var("Q"));
        assert_eq!(
            rule.apply(&expr).unwrap(),
            Expr::imp(Expr::not(Expr::var("Q")), Expr::not(Expr::var("P")))
        );
    }

    #[test]
    fn contrapositive_skips_doubly_negated_implications() {
        let rule = Contrapositive;
        let blocked = Expr::imp(Expr::not(Expr::var("Q")), Expr::not(Expr::var("P")));
        assert!(!rule.can_apply(&blocked));
        assert!(rule.apply(&blocked).is_err());
        // One negated side still matches.
        let half = Expr::imp(Expr::not(Expr::var("P")), Expr::var("Q"));
        assert!(rule.can_apply(&half));
    }
}
