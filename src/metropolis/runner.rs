//! Metropolis execution: delegation to SA with a constant schedule.

use super::config::MetropolisConfig;
use crate::annealing::{AnnealingConfig, CoolingSchedule, SimulatedAnnealing};
use crate::graph::{CostModel, PartitionedGraph};
use crate::relation::NeighborhoodRelation;
use crate::search::{LocalSearch, SearchResult};

/// The Metropolis algorithm: Simulated Annealing whose cooling
/// schedule returns the same temperature at every iteration.
pub struct Metropolis<R: NeighborhoodRelation, C: CostModel> {
    inner: SimulatedAnnealing<R, C>,
}

impl<R: NeighborhoodRelation, C: CostModel> Metropolis<R, C> {
    /// Binds the algorithm to a relation and a cost model.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(relation: R, cost: C, config: MetropolisConfig) -> Self {
        config.validate().expect("invalid MetropolisConfig");
        let mut annealing = AnnealingConfig::default()
            .with_max_iterations(config.max_iterations)
            .with_cooling(CoolingSchedule::Constant {
                temperature: config.temperature,
            })
            .with_constant(config.constant);
        if let Some(seed) = config.seed {
            annealing = annealing.with_seed(seed);
        }
        Self {
            inner: SimulatedAnnealing::new(relation, cost, annealing),
        }
    }
}

impl<R: NeighborhoodRelation, C: CostModel> LocalSearch for Metropolis<R, C> {
    fn run(&mut self, initial: &PartitionedGraph) -> SearchResult {
        self.inner.run(initial)
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
    fn test_matches_annealing_with_constant_schedule() {
        let initial = four_node_state(vec![
            Partition::P2,
            Partition::P1,
            Partition::P1,
            Partition::P2,
        ]);
        let mut metropolis = Metropolis::new(
            SingleFlipRelation::new(),
            CutWeight,
            MetropolisConfig::default()
                .with_max_iterations(100)
                .with_temperature(0.5)
                .with_seed(42),
        );
        let mut annealing = SimulatedAnnealing::new(
            SingleFlipRelation::new(),
            CutWeight,
            AnnealingConfig::default()
                .with_max_iterations(100)
                .with_cooling(CoolingSchedule::Constant { temperature: 0.5 })
                .with_seed(42),
        );
        let from_metropolis = metropolis.run(&initial);
        let from_annealing = annealing.run(&initial);
        assert_eq!(from_metropolis.best, from_annealing.best);
        assert_eq!(from_metropolis.best_cost, from_annealing.best_cost);
    }

    #[test]
    fn test_best_never_regresses_below_initial() {
        let initial = four_node_state(vec![
            Partition::P1,
            Partition::P1,
            Partition::P2,
            Partition::P2,
        ]);
        let initial_cost = CutWeight.cost(&initial);
        // A huge temperature drives the acceptance probability of
        // any worsening move toward 1.
        let mut search = Metropolis::new(
            SingleFlipRelation::new(),
            CutWeight,
            MetropolisConfig::default()
                .with_max_iterations(500)
                .with_temperature(1e12)
                .with_seed(3),
        );
        let result = search.run(&initial);
        assert!(
            result.best_cost >= initial_cost,
            "best {} regressed below initial {}",
            result.best_cost,
            initial_cost
        );
    }

    #[test]
    #[should_panic(expected = "invalid MetropolisConfig")]
    fn test_invalid_config_rejected_at_construction() {
        Metropolis::new(
            SingleFlipRelation::new(),
            CutWeight,
            MetropolisConfig::default().with_temperature(-0.5),
        );
    }
}
