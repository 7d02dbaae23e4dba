//! Truth tables and the exhaustive equivalence oracle
//!
//! Rows are enumerated in canonical order: for row `i`, the variable at
//! sorted position `j` receives bit `(i >> (k - 1 - j)) & 1`, high bit
//! first.

use crate::error::TruthTableError;
use crate::logic::eval::{evaluate, Assignment};
use crate::logic::expr::Expr;

/// Hard cap on the variable count; 2^15 rows is the largest table served
pub const MAX_TRUTH_TABLE_VARIABLES: usize = 15;

/// One row: a total assignment and the value of the expression under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

/// A complete truth table over the expression's sorted variable list
#[derive(Debug, Clone, PartialEq)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<Row>,
}

/// Summary statistics derived from a completed table
#[derive(Debug, Clone, PartialEq)]
pub struct TableAnalysis {
    pub satisfiable_count: usize,
    pub total_rows: usize,
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_contingent: bool,
    pub satisfiability_ratio: f64,
}

/// Enumerate all assignments of `expr` and record the results
pub fn truth_table(expr: &Expr) -> Result<TruthTable, TruthTableError> {
    let variables: Vec<String> = expr.variables().into_iter().collect();
    if variables.len() > MAX_TRUTH_TABLE_VARIABLES {
        return Err(TruthTableError::TooManyVariables(variables.len()));
    }

    let k = variables.len();
    let mut rows = Vec::with_capacity(1 << k);
    for index in 0..(1usize << k) {
        let mut assignment = Assignment::new();
        for (j, name) in variables.iter().enumerate() {
            assignment.insert(name.clone(), (index >> (k - 1 - j)) & 1 == 1);
        }
        let result = evaluate(expr, &assignment)?;
        rows.push(Row { assignment, result });
    }

    Ok(TruthTable { variables, rows })
}

impl TruthTable {
    /// Derive tautology/contradiction/contingency statistics
    pub fn analyze(&self) -> TableAnalysis {
        let total_rows = self.rows.len();
        let satisfiable_count = self.rows.iter().filter(|row| row.result).count();
        TableAnalysis {
            satisfiable_count,
            total_rows,
            is_tautology: total_rows > 0 && satisfiable_count == total_rows,
            is_contradiction: total_rows > 0 && satisfiable_count == 0,
            is_contingent: satisfiable_count > 0 && satisfiable_count < total_rows,
            satisfiability_ratio: if total_rows == 0 {
                0.0
            } else {
                satisfiable_count as f64 / total_rows as f64
            },
        }
    }

    /// CSV rendering: `var1,var2,…,Result` header, `0`/`1` cells, LF rows
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for name in &self.variables {
            out.push_str(name);
            out.push(',');
        }
        out.push_str("Result\n");
        for row in &self.rows {
            for name in &self.variables {
                out.push(if row.assignment[name] { '1' } else { '0' });
                out.push(',');
            }
            out.push(if row.result { '1' } else { '0' });
            out.push('\n');
        }
        out
    }

    /// Plain-text rendering with a dashed separator under the header
    pub fn render(&self) -> String {
        let mut header_cells: Vec<String> = self.variables.clone();
        header_cells.push("Result".to_string());
        let header = header_cells.join(" | ");

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.chars().count()));
        for row in &self.rows {
            out.push('\n');
            let mut cells: Vec<String> = Vec::with_capacity(header_cells.len());
            for name in &self.variables {
                let value = if row.assignment[name] { "T" } else { "F" };
                cells.push(format!("{:<width$}", value, width = name.chars().count()));
            }
            cells.push(if row.result { "T" } else { "F" }.to_string());
            out.push_str(cells.join(" | ").trim_end());
        }
        out
    }
}

/// Semantic equivalence by exhaustive evaluation over the union alphabet
///
/// Any evaluation failure reports non-equivalence, including a variable
/// union past the table cap, where the exhaustive oracle is unavailable.
pub fn equivalent(left: &Expr, right: &Expr) -> bool {
    let mut union = left.variables();
    union.extend(right.variables());
    let variables: Vec<String> = union.into_iter().collect();
    let k = variables.len();
    if k > MAX_TRUTH_TABLE_VARIABLES {
        return false;
    }

    for index in 0..(1usize << k) {
        let mut assignment = Assignment::new();
        for (j, name) in variables.iter().enumerate() {
            assignment.insert(name.clone(), (index >> (k - 1 - j)) & 1 == 1);
        }
        match (evaluate(left, &assignment), evaluate(right, &assignment)) {
            (Ok(a), Ok(b)) if a == b => {}
            _ => return false,
        }
    }
    true
}
