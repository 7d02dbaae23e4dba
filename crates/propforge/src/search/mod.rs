//! Bounded breadth-first proof search
//!
//! States are expressions; edges are single rewrites from the driver.
//! The search dedupes states by structural fingerprint, so with unit edge
//! costs the first proof reached uses the fewest rule applications any
//! proof within the budgets can have. Rule order only breaks ties among
//! equally short proofs.

pub mod proof;

pub use proof::{AppliedRule, Proof, ProofStep};

use crate::logic::expr::Expr;
use crate::rewrite::all_rewrites;
use crate::rules::{full_catalogue, TransformRule};
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Budgets for the breadth-first search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Rewrites on the longest considered path
    pub max_depth: usize,
    /// Dequeued states before the search gives up
    pub max_states: usize,
    /// Size cap on intermediate expressions
    pub max_expression_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 15,
            max_states: 10_000,
            max_expression_length: 15,
        }
    }
}

/// Counters accumulated while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Dequeued states
    pub states_explored: usize,
    /// Deepest level actually expanded
    pub search_depth: usize,
}

/// What the search concluded
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// A rewrite sequence from source to target
    Proved(Proof),
    /// The budgets or the frontier ran out
    NotFound,
    /// The cancellation flag was observed set
    Cancelled,
}

/// Outcome plus statistics; "no proof" is a value, not an error
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Proved(_))
    }

    pub fn proof(&self) -> Option<&Proof> {
        match &self.outcome {
            SearchOutcome::Proved(proof) => Some(proof),
            _ => None,
        }
    }
}

/// Arena entry; parents always precede children in BFS order, so
/// reconstruction cannot cycle
struct SearchNode {
    expr: Expr,
    parent: Option<usize>,
    rule: Option<AppliedRule>,
    depth: usize,
}

/// Expansions between progress callbacks and cancellation checks
const PROGRESS_INTERVAL: usize = 100;

/// Breadth-first search engine over rewrite states
pub struct ProofSearch {
    pub config: SearchConfig,
    rules: Vec<Box<dyn TransformRule>>,
    /// Cancellation flag — set to `true` to stop the search loop.
    pub cancel: Arc<AtomicBool>,
    progress: Option<Box<dyn FnMut(usize, usize)>>,
}

impl ProofSearch {
    /// Search with the full catalogue
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rules(config, full_catalogue())
    }

    /// Search with a custom rule list
    pub fn with_rules(config: SearchConfig, rules: Vec<Box<dyn TransformRule>>) -> Self {
        ProofSearch {
            config,
            rules,
            cancel: Arc::new(AtomicBool::new(false)),
            progress: None,
        }
    }

    /// Install a progress callback, invoked every 100 expansions with
    /// `(states_explored, current_depth)`
    pub fn on_progress(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Handle the host can set from another thread to stop the search
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Search for a rewrite sequence carrying `source` into `target`
    pub fn run(&mut self, source: &Expr, target: &Expr) -> SearchResult {
        let mut stats = SearchStats::default();

        if source == target {
            let proof = Proof {
                source: source.clone(),
                target: target.clone(),
                steps: vec![ProofStep { expr: source.clone(), rule: None }],
            };
            return SearchResult { outcome: SearchOutcome::Proved(proof), stats };
        }

        let mut nodes = vec![SearchNode {
            expr: source.clone(),
            parent: None,
            rule: None,
            depth: 0,
        }];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        let mut visited: IndexSet<String> = IndexSet::new();
        visited.insert(source.fingerprint());

        while let Some(index) = queue.pop_front() {
            stats.states_explored += 1;
            if stats.states_explored >= self.config.max_states {
                return SearchResult { outcome: SearchOutcome::NotFound, stats };
            }

            let depth = nodes[index].depth;
            if stats.states_explored % PROGRESS_INTERVAL == 0 {
                if let Some(callback) = self.progress.as_mut() {
                    callback(stats.states_explored, depth);
                }
                if self.cancel.load(Ordering::Relaxed) {
                    return SearchResult { outcome: SearchOutcome::Cancelled, stats };
                }
            }

            if depth >= self.config.max_depth {
                continue;
            }
            stats.search_depth = stats.search_depth.max(depth);

            let rewrites =
                all_rewrites(&nodes[index].expr, &self.rules, self.config.max_expression_length);
            for rewrite in rewrites {
                let fingerprint = rewrite.expr.fingerprint();
                if visited.contains(&fingerprint) {
                    continue;
                }
                let applied = AppliedRule { name: rewrite.rule, category: rewrite.category };
                let reached_target = rewrite.expr == *target;
                nodes.push(SearchNode {
                    expr: rewrite.expr,
                    parent: Some(index),
                    rule: Some(applied),
                    depth: depth + 1,
                });
                if reached_target {
                    let proof = reconstruct(&nodes, source, target);
                    return SearchResult { outcome: SearchOutcome::Proved(proof), stats };
                }
                visited.insert(fingerprint);
                queue.push_back(nodes.len() - 1);
            }
        }

        SearchResult { outcome: SearchOutcome::NotFound, stats }
    }
}

/// Walk parent pointers from the last node back to the source
fn reconstruct(nodes: &[SearchNode], source: &Expr, target: &Expr) -> Proof {
    let mut steps = Vec::new();
    let mut current = Some(nodes.len() - 1);
    while let Some(index) = current {
        steps.push(ProofStep {
            expr: nodes[index].expr.clone(),
            rule: nodes[index].rule.clone(),
        });
        current = nodes[index].parent;
    }
    steps.reverse();
    Proof {
        source: source.clone(),
        target: target.clone(),
        steps,
    }
}

/// Default-configuration search with the full catalogue
pub fn find_proof(source: &Expr, target: &Expr) -> SearchResult {
    ProofSearch::new(SearchConfig::default()).run(source, target)
}
