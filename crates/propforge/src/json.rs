//! JSON serialization types for expressions, truth tables and proofs
//!
//! Owned mirror types with `From` conversions; hosts that want a wire
//! format serialize these rather than the core structures.

use crate::logic::expr::Expr;
use crate::logic::truth_table::TruthTable;
use crate::search::{Proof, ProofStep, SearchOutcome, SearchResult};
use serde::{Deserialize, Serialize};

/// JSON representation of an expression
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExprJson {
    Variable { name: String },
    True,
    False,
    Not { operand: Box<ExprJson> },
    Binary { op: String, left: Box<ExprJson>, right: Box<ExprJson> },
}

impl From<&Expr> for ExprJson {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Variable(name) => ExprJson::Variable { name: name.clone() },
            Expr::True => ExprJson::True,
            Expr::False => ExprJson::False,
            Expr::Not(child) => ExprJson::Not {
                operand: Box::new(child.as_ref().into()),
            },
            Expr::Binary(op, left, right) => ExprJson::Binary {
                op: op.tag().to_string(),
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
        }
    }
}

/// JSON representation of one truth-table row; `values` follows the
/// table's variable order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowJson {
    pub values: Vec<bool>,
    pub result: bool,
}

/// JSON representation of a truth table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthTableJson {
    pub variables: Vec<String>,
    pub rows: Vec<RowJson>,
}

impl From<&TruthTable> for TruthTableJson {
    fn from(table: &TruthTable) -> Self {
        TruthTableJson {
            variables: table.variables.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| RowJson {
                    values: table
                        .variables
                        .iter()
                        .map(|name| row.assignment[name])
                        .collect(),
                    result: row.result,
                })
                .collect(),
        }
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            expression: step.expr.to_string(),
            rule: step.rule.as_ref().map(|r| r.name.to_string()),
            category: step.rule.as_ref().map(|r| r.category.tag().to_string()),
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub source: String,
    pub target: String,
    pub steps: Vec<ProofStepJson>,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        ProofJson {
            source: proof.source.to_string(),
            target: proof.target.to_string(),
            steps: proof.steps.iter().map(|s| s.into()).collect(),
        }
    }
}

/// JSON representation of a search result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum SearchResultJson {
    Proved {
        proof: ProofJson,
        states_explored: usize,
        search_depth: usize,
    },
    NotFound {
        states_explored: usize,
        search_depth: usize,
    },
    Cancelled {
        states_explored: usize,
        search_depth: usize,
    },
}

impl From<&SearchResult> for SearchResultJson {
    fn from(result: &SearchResult) -> Self {
        let states_explored = result.stats.states_explored;
        let search_depth = result.stats.search_depth;
        match &result.outcome {
            SearchOutcome::Proved(proof) => SearchResultJson::Proved {
                proof: proof.into(),
                states_explored,
                search_depth,
            },
            SearchOutcome::NotFound => SearchResultJson::NotFound {
                states_explored,
                search_depth,
            },
            SearchOutcome::Cancelled => SearchResultJson::Cancelled {
                states_explored,
                search_depth,
            },
        }
    }
}

impl SearchResultJson {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expressions_serialize_tagged() {
        let expr = Expr::not(Expr::and(Expr::var("a"), Expr::True));
        let value = serde_json::to_value(ExprJson::from(&expr)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Not",
                "operand": {
                    "type": "Binary",
                    "op": "AND",
                    "left": { "type": "Variable", "name": "a" },
                    "right": { "type": "True" },
                }
            })
        );
    }

    #[test]
    fn not_found_results_carry_statistics() {
        use crate::search::{SearchOutcome, SearchResult, SearchStats};
        let result = SearchResult {
            outcome: SearchOutcome::NotFound,
            stats: SearchStats { states_explored: 42, search_depth: 3 },
        };
        let value = serde_json::to_value(SearchResultJson::from(&result)).unwrap();
        assert_eq!(
            value,
            json!({ "result": "NotFound", "states_explored": 42, "search_depth": 3 })
        );
    }
}
