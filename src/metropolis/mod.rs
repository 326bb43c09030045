//! Metropolis algorithm.
//!
//! Simulated Annealing specialized to a constant temperature: the
//! acceptance probability for a worsening move never decays, so the
//! walk keeps its mobility for the whole run.
//!
//! # Reference
//!
//! Metropolis, Rosenbluth, Rosenbluth, Teller & Teller (1953),
//! "Equation of State Calculations by Fast Computing Machines",
//! *Journal of Chemical Physics* 21(6), 1087-1092.

mod config;
mod runner;

pub use config::MetropolisConfig;
pub use runner::Metropolis;
