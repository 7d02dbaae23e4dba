//! Rewrite driver: enumerate every single-rule, single-position rewrite

use crate::logic::expr::Expr;
use crate::rules::{RuleCategory, TransformRule};
use indexmap::IndexSet;
use std::collections::VecDeque;

/// One rewrite of an expression: the result plus the rule that produced it
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub expr: Expr,
    pub rule: &'static str,
    pub category: RuleCategory,
}

/// Every expression reachable from `expr` by applying exactly one rule at
/// exactly one position, keeping only results whose size stays within
/// `max_len`
///
/// Deterministic order: root rules in catalogue order, then rewrites
/// lifted out of the negation child, then the left and the right operand
/// of a binary node. A rule that refuses its own match is skipped and
/// reported on the warning channel.
pub fn all_rewrites(
    expr: &Expr,
    rules: &[Box<dyn TransformRule>],
    max_len: usize,
) -> Vec<Rewrite> {
    let mut rewrites = Vec::new();

    for rule in rules {
        if !rule.can_apply(expr) {
            continue;
        }
        match rule.apply(expr) {
            Ok(rewritten) => {
                if rewritten.size() <= max_len {
                    rewrites.push(Rewrite {
                        expr: rewritten,
                        rule: rule.name(),
                        category: rule.category(),
                    });
                }
            }
            Err(violation) => log::warn!("skipping rewrite: {}", violation),
        }
    }

    match expr {
        Expr::Not(child) => {
            for rewrite in all_rewrites(child, rules, max_len.saturating_sub(1)) {
                rewrites.push(Rewrite {
                    expr: Expr::not(rewrite.expr),
                    rule: rewrite.rule,
                    category: rewrite.category,
                });
            }
        }
        Expr::Binary(op, left, right) => {
            let left_budget = max_len.saturating_sub(right.size() + 1);
            for rewrite in all_rewrites(left, rules, left_budget) {
                rewrites.push(Rewrite {
                    expr: Expr::Binary(*op, Box::new(rewrite.expr), right.clone()),
                    rule: rewrite.rule,
                    category: rewrite.category,
                });
            }
            let right_budget = max_len.saturating_sub(left.size() + 1);
            for rewrite in all_rewrites(right, rules, right_budget) {
                rewrites.push(Rewrite {
                    expr: Expr::Binary(*op, left.clone(), Box::new(rewrite.expr)),
                    rule: rewrite.rule,
                    category: rewrite.category,
                });
            }
        }
        _ => {}
    }

    rewrites
}

/// Every distinct expression reachable from `expr` by at most `max_depth`
/// rewrites under the length cap, in breadth-first order
pub fn possible_forms(
    expr: &Expr,
    rules: &[Box<dyn TransformRule>],
    max_depth: usize,
    max_len: usize,
) -> Vec<Expr> {
    let mut seen: IndexSet<String> = IndexSet::new();
    seen.insert(expr.fingerprint());
    let mut forms = Vec::new();
    let mut frontier: VecDeque<(Expr, usize)> = VecDeque::from([(expr.clone(), 0)]);

    while let Some((current, depth)) = frontier.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for rewrite in all_rewrites(&current, rules, max_len) {
            if seen.insert(rewrite.expr.fingerprint()) {
                forms.push(rewrite.expr.clone());
                frontier.push_back((rewrite.expr, depth + 1));
            }
        }
    }

    forms
}
