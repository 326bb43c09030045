//! Runs the Max-Cut evaluation grid over a sweep of instance sizes.
//!
//! For each node count, every algorithm is paired with every
//! relation over a shared set of random G(n, p) instances; mean cut
//! values go to the console and to one CSV file per algorithm under
//! `<out_dir>/<node_count>/`.

use std::env;
use std::path::PathBuf;

use u_maxcut::annealing::CoolingSchedule;
use u_maxcut::experiment::{AlgorithmSpec, Experiment, ExperimentConfig, RelationSpec};

const MIN_NODE_COUNT: usize = 5;
const MAX_NODE_COUNT: usize = 10;
const NUM_INSTANCES: usize = 200;
const EDGE_PROBABILITY: f64 = 0.1;
const MAX_ITERATIONS: usize = 300;
const SEED: u64 = 1;

fn main() {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("experiment_out"));

    let relations = vec![
        RelationSpec::SingleFlip,
        RelationSpec::KFlip { k: 2 },
        RelationSpec::KFlip { k: 3 },
        RelationSpec::KFlip { k: 4 },
        RelationSpec::KernighanLin,
    ];
    let algorithms = vec![
        AlgorithmSpec::GradientAscent {
            max_iterations: MAX_ITERATIONS,
        },
        AlgorithmSpec::Metropolis {
            max_iterations: MAX_ITERATIONS,
            temperature: 0.5,
            constant: 1.0,
        },
        AlgorithmSpec::SimulatedAnnealing {
            max_iterations: MAX_ITERATIONS,
            cooling: CoolingSchedule::TriangularDecay {
                scale: 2.0,
                alpha: 0.99994,
            },
            constant: 1.0,
        },
        AlgorithmSpec::TabuSearch {
            max_iterations: MAX_ITERATIONS,
        },
    ];

    for node_count in MIN_NODE_COUNT..=MAX_NODE_COUNT {
        let config = ExperimentConfig::default()
            .with_name(format!("maximum-cut n={node_count}"))
            .with_num_instances(NUM_INSTANCES)
            .with_node_count(node_count)
            .with_edge_probability(EDGE_PROBABILITY)
            .with_seed(SEED);

        let report = Experiment::new(config).run(&algorithms, &relations);
        print!("{}", report.render());

        let target = out_dir.join(node_count.to_string());
        report
            .write_csv(&target)
            .expect("failed to write CSV results");
        println!("results written to {}\n", target.display());
    }
}
