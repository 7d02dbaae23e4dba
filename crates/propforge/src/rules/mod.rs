//! Equivalence-preserving transformation rules
//!
//! Every rule rewrites the root of the expression it is handed; locating
//! a position inside a larger tree is the driver's job (`crate::rewrite`).
//! All matching is structural, never semantic.

mod commutativity;
mod de_morgan;
mod distributivity;
mod equivalence;
mod idempotence;
mod implication;
mod negation;
mod simplification;


pub use commutativity::{
    CommutativityAnd, CommutativityAndAnd, CommutativityIff, CommutativityOr, CommutativityOrOr,
};
pub use de_morgan::{DeMorganAnd, DeMorganAndReverse, DeMorganOr, DeMorganOrReverse};
pub use distributivity::{
    DistributivityAnd, DistributivityAndReverse, DistributivityOr, DistributivityOrReverse,
};
pub use equivalence::{Equivalence, EquivalenceReverse};
pub use idempotence::{Idempotence, IdempotenceReverseAnd, IdempotenceReverseOr};
pub use implication::{Contrapositive, ImplicationElimination, ImplicationEliminationReverse};
pub use negation::{Contradiction, DoubleNegation, ExcludedMiddle};
pub use simplification::{
    Simplification1, Simplification1False, Simplification1ReverseAnd, Simplification1ReverseOr,
    Simplification1True, Simplification2And, Simplification2Or,
};

use crate::error::RuleViolation;
use crate::logic::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping tag attached to each rule, cited by proof rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    CommAssoc,
    Neg,
    Lem,
    Contr,
    Dm,
    Impl,
    Distr,
    Contrapos,
    Idemp,
    Equiv,
    Simp1,
    Simp2,
}

impl RuleCategory {
    pub fn tag(&self) -> &'static str {
        match self {
            RuleCategory::CommAssoc => "comm_assoc",
            RuleCategory::Neg => "neg",
            RuleCategory::Lem => "lem",
            RuleCategory::Contr => "contr",
            RuleCategory::Dm => "dm",
            RuleCategory::Impl => "impl",
            RuleCategory::Distr => "distr",
            RuleCategory::Contrapos => "contrapos",
            RuleCategory::Idemp => "idemp",
            RuleCategory::Equiv => "equiv",
            RuleCategory::Simp1 => "simp1",
            RuleCategory::Simp2 => "simp2",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An equivalence-preserving rewrite acting at the expression root
pub trait TransformRule: Send + Sync {
    /// Stable rule identifier
    fn name(&self) -> &'static str;

    /// Grouping tag cited in proofs
    fn category(&self) -> RuleCategory;

    /// Statement of the law
    fn description(&self) -> &'static str;

    /// Whether the rule matches the root of `expr`
    fn can_apply(&self, expr: &Expr) -> bool;

    /// Rewrite the root of `expr`
    ///
    /// Partial: calling it where `can_apply` is false is a contract
    /// violation and reports `RuleViolation`.
    fn apply(&self, expr: &Expr) -> Result<Expr, RuleViolation>;
}

/// True when `candidate` is exactly `!other`
fn negation_of(candidate: &Expr, other: &Expr) -> bool {
    matches!(candidate, Expr::Not(inner) if inner.as_ref() == other)
}

/// The full catalogue, in canonical order
///
/// The order fixes BFS tie-breaking among equally short proofs, so it is
/// part of the observable behavior.
pub fn full_catalogue() -> Vec<Box<dyn TransformRule>> {
    vec![
        Box::new(CommutativityAnd),
        Box::new(CommutativityOr),
        Box::new(CommutativityIff),
        Box::new(CommutativityAndAnd),
        Box::new(CommutativityOrOr),
        Box::new(DoubleNegation),
        Box::new(ExcludedMiddle),
        Box::new(Contradiction),
        Box::new(DeMorganAnd),
        Box::new(DeMorganOr),
        Box::new(DeMorganAndReverse),
        Box::new(DeMorganOrReverse),
        Box::new(ImplicationElimination),
        Box::new(ImplicationEliminationReverse),
        Box::new(Contrapositive),
        Box::new(DistributivityAnd),
        Box::new(DistributivityOr),
        Box::new(DistributivityAndReverse),
        Box::new(DistributivityOrReverse),
        Box::new(Idempotence),
        Box::new(IdempotenceReverseAnd),
        Box::new(IdempotenceReverseOr),
        Box::new(Equivalence),
        Box::new(EquivalenceReverse),
        Box::new(Simplification1),
        Box::new(Simplification1ReverseAnd),
        Box::new(Simplification1ReverseOr),
        Box::new(Simplification1True),
        Box::new(Simplification1False),
        Box::new(Simplification2And),
        Box::new(Simplification2Or),
    ]
}
