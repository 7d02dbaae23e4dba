//! Simplification with constants and absorption
//!
//! The simp1 family handles the identity and annihilator laws of the
//! constants; the simp2 family is absorption. The reverse directions are
//! expansive and rely on the driver's length budget, like the idempotence
//! reverses.

use super::{RuleCategory, TransformRule};
use crate::error::RuleViolation;
use crate::logic::expr::{BinaryOp, Expr};

/// `a & true`, `true & a`, `a | false` and `false | a` collapse to `a`
pub struct Simplification1;

impl TransformRule for Simplification1 {
    fn name(&self) -> &'static str {
        "Simplification1"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp1
    }

    fn description(&self) -> &'static str {
        "a & true <=> a | false <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::And, left, right) => {
                **left == Expr::True || **right == Expr::True
            }
            Expr::Binary(BinaryOp::Or, left, right) => {
                **left == Expr::False || **right == Expr::False
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        match expr {
            Expr::Binary(BinaryOp::And, left, right) if **left == Expr::True => {
                Ok((**right).clone())
            }
            Expr::Binary(BinaryOp::And, left, right) if **right == Expr::True => {
                Ok((**left).clone())
            }
            Expr::Binary(BinaryOp::Or, left, right) if **left == Expr::False => {
                Ok((**right).clone())
            }
            Expr::Binary(BinaryOp::Or, left, right) if **right == Expr::False => {
                Ok((**left).clone())
            }
            _ => Err(RuleViolation::new(self.name())),
        }
    }
}

/// `a` expands to `a & true`; skipped when the expression already has a
/// `true` conjunct
pub struct Simplification1ReverseAnd;

impl TransformRule for Simplification1ReverseAnd {
    fn name(&self) -> &'static str {
        "Simplification1Reverse(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp1
    }

    fn description(&self) -> &'static str {
        "a <=> a & true"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        !matches!(
            expr,
            Expr::Binary(BinaryOp::And, left, right)
                if **left == Expr::True || **right == Expr::True
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::and(expr.clone(), Expr::True));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a` expands to `a | false`; skipped when the expression already has a
/// `false` disjunct
pub struct Simplification1ReverseOr;

impl TransformRule for Simplification1ReverseOr {
    fn name(&self) -> &'static str {
        "Simplification1Reverse(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp1
    }

    fn description(&self) -> &'static str {
        "a <=> a | false"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        !matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, right)
                if **left == Expr::False || **right == Expr::False
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::or(expr.clone(), Expr::False));
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a | true` and `true | a` collapse to `true`
pub struct Simplification1True;

impl TransformRule for Simplification1True {
    fn name(&self) -> &'static str {
        "Simplification1(True)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp1
    }

    fn description(&self) -> &'static str {
        "a | true <=> true"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::Or, left, right)
                if **left == Expr::True || **right == Expr::True
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::True);
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a & false` and `false & a` collapse to `false`
pub struct Simplification1False;

impl TransformRule for Simplification1False {
    fn name(&self) -> &'static str {
        "Simplification1(False)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp1
    }

    fn description(&self) -> &'static str {
        "a & false <=> false"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Binary(BinaryOp::And, left, right)
                if **left == Expr::False || **right == Expr::False
        )
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if self.can_apply(expr) {
            return Ok(Expr::False);
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// True when `inner` is `kept op x` or `x op kept`
fn absorbs(kept: &Expr, inner: &Expr, op: BinaryOp) -> bool {
    matches!(
        inner,
        Expr::Binary(o, left, right)
            if *o == op && (left.as_ref() == kept || right.as_ref() == kept)
    )
}

/// `a & (a | b)`, `(a | b) & a` and their mirrored forms collapse to `a`
pub struct Simplification2And;

impl TransformRule for Simplification2And {
    fn name(&self) -> &'static str {
        "Simplification2(AND)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp2
    }

    fn description(&self) -> &'static str {
        "a & (a | b) <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::And, left, right) => {
                absorbs(left, right, BinaryOp::Or) || absorbs(right, left, BinaryOp::Or)
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::And, left, right) = expr {
            if absorbs(left, right, BinaryOp::Or) {
                return Ok((**left).clone());
            }
            if absorbs(right, left, BinaryOp::Or) {
                return Ok((**right).clone());
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}

/// `a | (a & b)`, `(a & b) | a` and their mirrored forms collapse to `a`
pub struct Simplification2Or;

impl TransformRule for Simplification2Or {
    fn name(&self) -> &'static str {
        "Simplification2(OR)"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Simp2
    }

    fn description(&self) -> &'static str {
        "a | (a & b) <=> a"
    }

    fn can_apply(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinaryOp::Or, left, right) => {
                absorbs(left, right, BinaryOp::And) || absorbs(right, left, BinaryOp::And)
            }
            _ => false,
        }
    }

    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation> {
        if let Expr::Binary(BinaryOp::Or, left, right) = expr {
            if absorbs(left, right, BinaryOp::And) {
                return Ok((**left).clone());
            }
            if absorbs(right, left, BinaryOp::And) {
                return Ok((**right).clone());
            }
        }
        Err(RuleViolation::new(self.name()))
    }
}
