//! Common surface of the local-search algorithms.

use crate::graph::{CostModel, PartitionedGraph};

/// A local-search algorithm bound to one neighborhood relation and
/// one cost model.
///
/// All four algorithms share the same shape: initialize best and
/// current at the initial state, repeatedly generate neighbors and
/// apply the variant's acceptance rule, and stop on the variant's
/// no-improvement signal or after the configured iteration budget.
///
/// `run` takes `&mut self` because Tabu Search owns per-run memory;
/// every implementation resets such state at the start of a run, so
/// one instance may be reused for independent runs.
pub trait LocalSearch {
    /// Runs the search from `initial` and returns the best state found.
    fn run(&mut self, initial: &PartitionedGraph) -> SearchResult;
}

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best state found, the initial state if nothing beat it.
    pub best: PartitionedGraph,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Number of neighborhood scans performed.
    pub iterations: usize,

    /// Whether the run stopped early on its no-improvement rule
    /// rather than by exhausting the iteration budget.
    pub converged: bool,
}

/// Evaluates candidate costs in neighborhood order.
///
/// Cost evaluation is pure, so under the `parallel` feature the
/// candidates are scored with rayon; acceptance decisions always
/// consume the scores sequentially in generation order.
pub(crate) fn evaluate_costs<C: CostModel>(
    cost: &C,
    candidates: &[PartitionedGraph],
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        candidates.par_iter().map(|state| cost.cost(state)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates.iter().map(|state| cost.cost(state)).collect()
    }
}
