//! Experiment execution: the algorithm/relation grid.

use super::config::ExperimentConfig;
use super::generator::random_instance;
use super::report::{CellSummary, ExperimentReport};
use crate::annealing::{AnnealingConfig, CoolingSchedule, SimulatedAnnealing};
use crate::ascent::{AscentConfig, GradientAscent};
use crate::graph::{CutWeight, PartitionedGraph};
use crate::metropolis::{Metropolis, MetropolisConfig};
use crate::relation::{
    KFlipRelation, KernighanLinHeuristic, NeighborhoodRelation, SingleFlipRelation,
};
use crate::search::LocalSearch;
use crate::tabu::{TabuConfig, TabuSearch};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A neighborhood relation to evaluate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationSpec {
    SingleFlip,
    KFlip { k: usize },
    KernighanLin,
}

impl RelationSpec {
    /// Stable label used in reports and CSV rows.
    pub fn label(&self) -> String {
        match self {
            RelationSpec::SingleFlip => "single_flip".into(),
            RelationSpec::KFlip { k } => format!("kflip_{k}"),
            RelationSpec::KernighanLin => "kernighan_lin".into(),
        }
    }

    fn build(&self) -> Box<dyn NeighborhoodRelation> {
        match *self {
            RelationSpec::SingleFlip => Box::new(SingleFlipRelation::new()),
            RelationSpec::KFlip { k } => Box::new(KFlipRelation::new(k)),
            RelationSpec::KernighanLin => Box::new(KernighanLinHeuristic::new(CutWeight)),
        }
    }
}

/// A search algorithm to evaluate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmSpec {
    GradientAscent {
        max_iterations: usize,
    },
    SimulatedAnnealing {
        max_iterations: usize,
        cooling: CoolingSchedule,
        constant: f64,
    },
    Metropolis {
        max_iterations: usize,
        temperature: f64,
        constant: f64,
    },
    TabuSearch {
        max_iterations: usize,
    },
}

impl AlgorithmSpec {
    /// Stable label used in reports and CSV file names.
    pub fn label(&self) -> String {
        match self {
            AlgorithmSpec::GradientAscent { .. } => "gradient_ascent".into(),
            AlgorithmSpec::SimulatedAnnealing { .. } => "simulated_annealing".into(),
            AlgorithmSpec::Metropolis { .. } => "metropolis".into(),
            AlgorithmSpec::TabuSearch { .. } => "tabu_search".into(),
        }
    }

    fn build(
        &self,
        relation: Box<dyn NeighborhoodRelation>,
        seed: Option<u64>,
    ) -> Box<dyn LocalSearch> {
        match *self {
            AlgorithmSpec::GradientAscent { max_iterations } => Box::new(GradientAscent::new(
                relation,
                CutWeight,
                AscentConfig::default().with_max_iterations(max_iterations),
            )),
            AlgorithmSpec::SimulatedAnnealing {
                max_iterations,
                cooling,
                constant,
            } => {
                let mut config = AnnealingConfig::default()
                    .with_max_iterations(max_iterations)
                    .with_cooling(cooling)
                    .with_constant(constant);
                if let Some(seed) = seed {
                    config = config.with_seed(seed);
                }
                Box::new(SimulatedAnnealing::new(relation, CutWeight, config))
            }
            AlgorithmSpec::Metropolis {
                max_iterations,
                temperature,
                constant,
            } => {
                let mut config = MetropolisConfig::default()
                    .with_max_iterations(max_iterations)
                    .with_temperature(temperature)
                    .with_constant(constant);
                if let Some(seed) = seed {
                    config = config.with_seed(seed);
                }
                Box::new(Metropolis::new(relation, CutWeight, config))
            }
            AlgorithmSpec::TabuSearch { max_iterations } => Box::new(TabuSearch::new(
                relation,
                CutWeight,
                TabuConfig::default().with_max_iterations(max_iterations),
            )),
        }
    }
}

/// Runs every algorithm against every relation over one shared set
/// of random instances.
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    /// Creates an experiment.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(config: ExperimentConfig) -> Self {
        config.validate().expect("invalid ExperimentConfig");
        Self { config }
    }

    /// Generates the instance set, evaluates the full grid, and
    /// aggregates mean final costs per cell.
    ///
    /// Every cell gets a freshly built algorithm instance, so no
    /// search memory carries over between cells; instances are shared
    /// across cells so every cell sees the same inputs.
    pub fn run(
        &self,
        algorithms: &[AlgorithmSpec],
        relations: &[RelationSpec],
    ) -> ExperimentReport {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let instances: Vec<PartitionedGraph> = (0..self.config.num_instances)
            .map(|_| {
                random_instance(self.config.node_count, self.config.edge_probability, &mut rng)
            })
            .collect();

        let mut cells = Vec::with_capacity(algorithms.len() * relations.len());
        for algorithm in algorithms {
            for relation in relations {
                let mut search = algorithm.build(relation.build(), self.config.seed);
                let costs: Vec<f64> = instances
                    .iter()
                    .map(|instance| search.run(instance).best_cost)
                    .collect();
                cells.push(CellSummary {
                    algorithm: algorithm.label(),
                    relation: relation.label(),
                    mean_cost: mean(&costs),
                    instances: costs.len(),
                });
            }
        }

        ExperimentReport {
            name: self.config.name.clone(),
            cells,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> (Vec<AlgorithmSpec>, Vec<RelationSpec>) {
        let algorithms = vec![
            AlgorithmSpec::GradientAscent { max_iterations: 20 },
            AlgorithmSpec::Metropolis {
                max_iterations: 20,
                temperature: 0.5,
                constant: 1.0,
            },
            AlgorithmSpec::SimulatedAnnealing {
                max_iterations: 20,
                cooling: CoolingSchedule::TriangularDecay {
                    scale: 2.0,
                    alpha: 0.99994,
                },
                constant: 1.0,
            },
            AlgorithmSpec::TabuSearch { max_iterations: 20 },
        ];
        let relations = vec![
            RelationSpec::SingleFlip,
            RelationSpec::KFlip { k: 2 },
            RelationSpec::KernighanLin,
        ];
        (algorithms, relations)
    }

    #[test]
    fn test_full_grid_produces_one_cell_per_pair() {
        let (algorithms, relations) = small_grid();
        let experiment = Experiment::new(
            ExperimentConfig::default()
                .with_num_instances(3)
                .with_node_count(6)
                .with_edge_probability(0.4)
                .with_seed(1),
        );
        let report = experiment.run(&algorithms, &relations);
        assert_eq!(report.cells.len(), algorithms.len() * relations.len());
        for cell in &report.cells {
            assert_eq!(cell.instances, 3);
            assert!(
                cell.mean_cost.is_finite() && cell.mean_cost >= 0.0,
                "cell {}/{} has mean {}",
                cell.algorithm,
                cell.relation,
                cell.mean_cost
            );
        }
    }

    #[test]
    fn test_seeded_experiments_are_reproducible() {
        let algorithms = vec![AlgorithmSpec::TabuSearch { max_iterations: 15 }];
        let relations = vec![RelationSpec::SingleFlip];
        let build = || {
            Experiment::new(
                ExperimentConfig::default()
                    .with_num_instances(4)
                    .with_node_count(7)
                    .with_edge_probability(0.3)
                    .with_seed(11),
            )
        };
        let first = build().run(&algorithms, &relations);
        let second = build().run(&algorithms, &relations);
        assert_eq!(first.cells[0].mean_cost, second.cells[0].mean_cost);
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(RelationSpec::KFlip { k: 3 }.label(), "kflip_3");
        assert_eq!(
            AlgorithmSpec::GradientAscent { max_iterations: 1 }.label(),
            "gradient_ascent"
        );
    }

    #[test]
    #[should_panic(expected = "invalid ExperimentConfig")]
    fn test_invalid_config_rejected_at_construction() {
        Experiment::new(ExperimentConfig::default().with_num_instances(0));
    }
}
