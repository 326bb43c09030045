//! Gradient Ascent execution loop.

use super::config::AscentConfig;
use crate::graph::{CostModel, PartitionedGraph};
use crate::relation::NeighborhoodRelation;
use crate::search::{evaluate_costs, LocalSearch, SearchResult};

/// Steepest-ascent hill climbing over a neighborhood relation.
///
/// Each iteration scans the neighborhood of the best state in the
/// relation's order, replacing the best whenever a candidate strictly
/// exceeds the running best cost. The running comparison makes the
/// final pick of an iteration the neighborhood maximum, with ties
/// broken by first occurrence. An iteration without any replacement
/// is a local optimum and ends the run.
pub struct GradientAscent<R: NeighborhoodRelation, C: CostModel> {
    relation: R,
    cost: C,
    config: AscentConfig,
}

impl<R: NeighborhoodRelation, C: CostModel> GradientAscent<R, C> {
    /// Binds the algorithm to a relation and a cost model.
    pub fn new(relation: R, cost: C, config: AscentConfig) -> Self {
        Self {
            relation,
            cost,
            config,
        }
    }
}

impl<R: NeighborhoodRelation, C: CostModel> LocalSearch for GradientAscent<R, C> {
    fn run(&mut self, initial: &PartitionedGraph) -> SearchResult {
        let mut best = initial.clone();
        let mut best_cost = self.cost.cost(&best);
        assert!(
            best_cost.is_finite(),
            "initial solution has non-finite cost {best_cost}"
        );

        let mut iterations = 0;
        let mut converged = false;

        for _ in 0..self.config.max_iterations {
            iterations += 1;

            let neighborhood = self.relation.neighbors(&best);
            let costs = evaluate_costs(&self.cost, &neighborhood);

            let mut improved = false;
            for (candidate, cost) in neighborhood.into_iter().zip(costs) {
                if cost > best_cost {
                    best = candidate;
                    best_cost = cost;
                    improved = true;
                }
            }

            if !improved {
                converged = true;
                break;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CutWeight, Edge, GraphTopology, Partition};
    use crate::relation::SingleFlipRelation;
    use std::sync::Arc;

    fn four_node_state(labels: Vec<Partition>) -> PartitionedGraph {
        let edges = vec![
            Edge { u: 0, v: 2, weight: 0.5 },
            Edge { u: 1, v: 3, weight: 0.5 },
            Edge { u: 0, v: 1, weight: 0.1 },
            Edge { u: 2, v: 3, weight: 0.1 },
        ];
        let topology = Arc::new(GraphTopology::new(4, edges).unwrap());
        PartitionedGraph::new(topology, labels)
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let initial = four_node_state(vec![
            Partition::P1,
            Partition::P2,
            Partition::P1,
            Partition::P2,
        ]);
        let mut search = GradientAscent::new(
            SingleFlipRelation::new(),
            CutWeight,
            AscentConfig::default().with_max_iterations(0),
        );
        let result = search.run(&initial);
        assert_eq!(result.best, initial);
        assert_eq!(result.iterations, 0);
        assert!(!result.converged);
    }

    #[test]
    fn test_climbs_to_the_maximum_cut() {
        // The labeling {0,3} vs {1,2} puts all four edges across the
        // cut for a value of 1.2, and single flips reach it from the
        // lopsided start.
        let initial = four_node_state(vec![
            Partition::P1,
            Partition::P1,
            Partition::P1,
            Partition::P2,
        ]);
        let mut search = GradientAscent::new(
            SingleFlipRelation::new(),
            CutWeight,
            AscentConfig::default().with_max_iterations(100),
        );
        let result = search.run(&initial);
        assert!(
            (result.best_cost - 1.2).abs() < 1e-12,
            "expected the maximum cut of 1.2, got {}",
            result.best_cost
        );
        assert!(result.converged, "a local optimum must end the run early");
        assert!(result.iterations < 100);
    }

    #[test]
    fn test_idempotent_at_local_optimum() {
        let initial = four_node_state(vec![
            Partition::P1,
            Partition::P1,
            Partition::P2,
            Partition::P2,
        ]);
        let mut search = GradientAscent::new(
            SingleFlipRelation::new(),
            CutWeight,
            AscentConfig::default().with_max_iterations(50),
        );
        let first = search.run(&initial);
        let second = search.run(&first.best);
        assert_eq!(
            first.best, second.best,
            "rerunning from a local optimum must return it unchanged"
        );
        assert_eq!(first.best_cost, second.best_cost);
        assert_eq!(second.iterations, 1);
    }

    #[test]
    fn test_empty_neighborhood_terminates_immediately() {
        let topology = Arc::new(GraphTopology::new(2, vec![]).unwrap());
        let initial =
            PartitionedGraph::new(topology, vec![Partition::P1, Partition::P2]);
        // Both partitions hold a single node, so no flip is valid.
        let mut search = GradientAscent::new(
            SingleFlipRelation::new(),
            CutWeight,
            AscentConfig::default(),
        );
        let result = search.run(&initial);
        assert_eq!(result.best, initial);
        assert_eq!(result.iterations, 1);
        assert!(result.converged);
    }

    #[test]
    fn test_best_cost_never_below_initial() {
        let initial = four_node_state(vec![
            Partition::P2,
            Partition::P1,
            Partition::P1,
            Partition::P2,
        ]);
        let initial_cost = CutWeight.cost(&initial);
        let mut search = GradientAscent::new(
            SingleFlipRelation::new(),
            CutWeight,
            AscentConfig::default(),
        );
        let result = search.run(&initial);
        assert!(result.best_cost >= initial_cost);
    }
}
