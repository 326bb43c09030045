//! Tabu Search execution loop.

use super::config::TabuConfig;
use super::types::TabuList;
use crate::graph::{CostModel, PartitionedGraph};
use crate::relation::NeighborhoodRelation;
use crate::search::{evaluate_costs, LocalSearch, SearchResult};

/// Tabu Search over a neighborhood relation.
///
/// Each iteration scans the neighborhood of the current state in the
/// relation's order, tracking a running maximum that starts below
/// any real cost. Every candidate that strictly exceeds the running
/// maximum and whose labeling is not tabu becomes the provisional
/// winner and is recorded in the tabu list at that moment, so the
/// list also remembers runners-up that were later surpassed within
/// the same scan. The scan's final winner becomes the current state
/// even when it worsens the cost; the best state only updates on
/// strict improvement. A scan without any admissible candidate ends
/// the run.
///
/// The tabu list belongs to the instance but is reset at the start
/// of every run, so a `TabuSearch` may be reused across independent
/// runs without history leaking between them.
pub struct TabuSearch<R: NeighborhoodRelation, C: CostModel> {
    relation: R,
    cost: C,
    config: TabuConfig,
    tabu: TabuList,
}

impl<R: NeighborhoodRelation, C: CostModel> TabuSearch<R, C> {
    /// Binds the algorithm to a relation and a cost model.
    pub fn new(relation: R, cost: C, config: TabuConfig) -> Self {
        Self {
            relation,
            cost,
            config,
            tabu: TabuList::new(),
        }
    }

    /// Number of labelings recorded during the most recent run.
    pub fn tabu_len(&self) -> usize {
        self.tabu.len()
    }
}

impl<R: NeighborhoodRelation, C: CostModel> LocalSearch for TabuSearch<R, C> {
    fn run(&mut self, initial: &PartitionedGraph) -> SearchResult {
        self.tabu.clear();

        let mut best = initial.clone();
        let mut best_cost = self.cost.cost(&best);
        assert!(
            best_cost.is_finite(),
            "initial solution has non-finite cost {best_cost}"
        );
        let mut current = best.clone();
        self.tabu.insert(&current);

        let mut iterations = 0;
        let mut converged = false;

        for _ in 0..self.config.max_iterations {
            iterations += 1;

            let neighborhood = self.relation.neighbors(&current);
            let costs = evaluate_costs(&self.cost, &neighborhood);

            let mut winner: Option<PartitionedGraph> = None;
            let mut winner_cost = f64::NEG_INFINITY;
            for (candidate, cost) in neighborhood.into_iter().zip(costs) {
                if cost > winner_cost && !self.tabu.contains(&candidate) {
                    self.tabu.insert(&candidate);
                    winner = Some(candidate);
                    winner_cost = cost;
                }
            }

            match winner {
                Some(state) => {
                    current = state;
                    if winner_cost > best_cost {
                        best = current.clone();
                        best_cost = winner_cost;
                    }
                }
                None => {
                    converged = true;
                    break;
                }
            }
        }

        SearchResult {
            best,
            best_cost,
            iterations,
            converged,
        }
    }
}
