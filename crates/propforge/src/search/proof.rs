//! Proof structures and text rendering

use crate::logic::expr::Expr;
use crate::rules::RuleCategory;
use std::fmt;

/// The rule application that produced a proof step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRule {
    pub name: &'static str,
    pub category: RuleCategory,
}

/// One line of a transformational proof
///
/// The first step restates the source and carries no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub expr: Expr,
    pub rule: Option<AppliedRule>,
}

/// A sequence of equivalence-preserving steps from source to target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub source: Expr,
    pub target: Expr,
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Number of rule applications, one less than the number of steps
    pub fn rewrite_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Render the proof as numbered text
    ///
    /// Header `S  <->  T`, a blank line, then one line per step; steps
    /// after the first cite their rule's category, aligned three columns
    /// past the longest step.
    pub fn render(&self) -> String {
        let prefixes: Vec<String> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}) {}", i + 1, step.expr))
            .collect();
        let width = prefixes.iter().map(|p| p.chars().count()).max().unwrap_or(0);

        let mut out = format!("{}  <->  {}\n\n", self.source, self.target);
        for (prefix, step) in prefixes.iter().zip(&self.steps) {
            match &step.rule {
                Some(applied) => {
                    out.push_str(&format!(
                        "{:<width$}   by {}\n",
                        prefix,
                        applied.category,
                        width = width
                    ));
                }
                None => {
                    out.push_str(prefix);
                    out.push('\n');
                }
            }
        }
        out
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_aligns_rule_citations() {
        let source = Expr::not(Expr::and(Expr::var("a"), Expr::var("b")));
        let target = Expr::or(Expr::not(Expr::var("a")), Expr::not(Expr::var("b")));
        let proof = Proof {
            source: source.clone(),
            target: target.clone(),
            steps: vec![
                ProofStep { expr: source, rule: None },
                ProofStep {
                    expr: target,
                    rule: Some(AppliedRule {
                        name: "DeMorgan(AND)",
                        category: RuleCategory::Dm,
                    }),
                },
            ],
        };
        let text = proof.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "!(a & b)  <->  !a | !b");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "1) !(a & b)");
        assert_eq!(lines[3], "2) !a | !b    by dm");
        assert_eq!(proof.rewrite_count(), 1);
    }
}
