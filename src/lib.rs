//! Local-search laboratory for the Maximum-Cut problem.
//!
//! Provides a weighted two-partition graph model, a family of
//! neighborhood relations over partition labelings, and four
//! single-solution local-search algorithms that walk those
//! neighborhoods:
//!
//! - **Gradient Ascent**: steepest-ascent hill climbing with early
//!   termination at a local optimum.
//! - **Simulated Annealing (SA)**: stochastic acceptance of worsening
//!   moves governed by a pluggable cooling schedule.
//! - **Metropolis**: SA specialized to a constant temperature.
//! - **Tabu Search (TS)**: best-admissible-move search with a
//!   monotonically growing memory of visited labelings.
//!
//! Neighborhoods are produced by relations rather than baked into the
//! algorithms: the single-flip relation, the k-flip relation (every
//! way of moving up to k nodes across the cut), and the Kernighan-Lin
//! greedy unmarking heuristic all satisfy one trait and can be paired
//! with any algorithm.
//!
//! # Architecture
//!
//! The [`graph`] module owns the data model and the cut cost; the
//! [`relation`] module owns neighborhood enumeration; each algorithm
//! lives in its own module with a builder-style config and a runner.
//! The [`experiment`] module is a thin harness that generates random
//! instances and evaluates every algorithm against every relation;
//! it consumes only the public traits and carries no algorithmic
//! logic of its own.

pub mod annealing;
pub mod ascent;
pub mod experiment;
pub mod graph;
pub mod metropolis;
pub mod relation;
pub mod search;
pub mod tabu;
