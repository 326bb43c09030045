//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the
//! physical annealing process. Accepts worsening moves with a
//! probability that decreases over time (temperature), allowing the
//! search to escape local optima of the neighborhood relation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::{AnnealingConfig, CoolingSchedule};
pub use runner::SimulatedAnnealing;
