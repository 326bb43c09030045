//! Experiment harness.
//!
//! Generates random Max-Cut instances and evaluates every configured
//! algorithm against every configured neighborhood relation over the
//! same instance set, reporting the mean final cut value per
//! algorithm/relation cell on the console and as one CSV file per
//! algorithm.
//!
//! The harness is deliberately thin: it consumes the
//! [`crate::relation::NeighborhoodRelation`] and
//! [`crate::search::LocalSearch`] traits and the
//! [`crate::graph::CutWeight`] cost and contains no search logic of
//! its own.

mod config;
mod generator;
mod report;
mod runner;

pub use config::ExperimentConfig;
pub use generator::random_instance;
pub use report::{CellSummary, ExperimentReport};
pub use runner::{AlgorithmSpec, Experiment, RelationSpec};
