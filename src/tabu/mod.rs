//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory (the
//! tabu list) to forbid previously visited labelings, preventing
//! cycling and encouraging exploration of new regions of the search
//! space. This variant keeps every labeling it ever considered for
//! the whole run; there is no tenure-based expiry.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search-Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search-Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::TabuSearch;
pub use types::TabuList;
