//! SA execution loop.

use super::config::AnnealingConfig;
use crate::graph::{CostModel, PartitionedGraph};
use crate::relation::NeighborhoodRelation;
use crate::search::{LocalSearch, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated Annealing over a neighborhood relation.
///
/// Every iteration scans the neighborhood of the current state in
/// the relation's order. A candidate at least as good as the current
/// state is accepted unconditionally and the scan continues, so the
/// current state ends an improving scan at the last non-worsening
/// candidate rather than the best one. A worsening candidate is
/// accepted with probability
/// `exp(-(current - candidate) / (temperature(i) * constant))`
/// against a single uniform draw, and acceptance of a worsening
/// candidate ends the scan for that iteration immediately.
///
/// The asymmetry between the two acceptance paths (full scan on
/// non-worsening moves, first-hit-and-stop on worsening moves) is a
/// deliberate property of this implementation; both the trajectory
/// and the reported best depend on it, so it must not be "fixed"
/// into a symmetric scan.
pub struct SimulatedAnnealing<R: NeighborhoodRelation, C: CostModel> {
    relation: R,
    cost: C,
    config: AnnealingConfig,
}

impl<R: NeighborhoodRelation, C: CostModel> SimulatedAnnealing<R, C> {
    /// Binds the algorithm to a relation and a cost model.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(relation: R, cost: C, config: AnnealingConfig) -> Self {
        config.validate().expect("invalid AnnealingConfig");
        Self {
            relation,
            cost,
            config,
        }
    }
}

impl<R: NeighborhoodRelation, C: CostModel> LocalSearch for SimulatedAnnealing<R, C> {
    fn run(&mut self, initial: &PartitionedGraph) -> SearchResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = initial.clone();
        let mut current_cost = self.cost.cost(&current);
        assert!(
            current_cost.is_finite(),
            "initial solution has non-finite cost {current_cost}"
        );
        let mut best = current.clone();
        let mut best_cost = current_cost;

        for i in 1..=self.config.max_iterations {
            let temperature = self.config.cooling.temperature(i);

            for candidate in self.relation.neighbors(&current) {
                let candidate_cost = self.cost.cost(&candidate);

                if candidate_cost >= current_cost {
                    current = candidate;
                    current_cost = candidate_cost;
                    if current_cost > best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                } else {
                    let delta = current_cost - candidate_cost;
                    let probability = (-delta / (temperature * self.config.constant)).exp();
                    if rng.random_range(0.0..1.0) < probability {
                        current = candidate;
                        current_cost = candidate_cost;
                        break;
                    }
                }
            }
        }

        SearchResult {
            best,
            best_cost,
            iterations: self.config.max_iterations,
            converged: false,
        }
    }
}
