//! Neighborhood relations over partition labelings.
//!
//! A relation maps one search state to a finite, deterministically
//! ordered collection of nearby states. The search algorithms are
//! written against the [`NeighborhoodRelation`] trait only, so any
//! relation can drive any algorithm:
//!
//! - [`SingleFlipRelation`]: move exactly one node across the cut.
//! - [`KFlipRelation`]: move every subset of up to k nodes across the
//!   cut, in both directions. Neighborhood size is exponential in k.
//! - [`KernighanLinHeuristic`]: a greedy trajectory of single flips
//!   with node marking, after Kernighan & Lin (1970). Unlike the
//!   other relations it returns an ordered improvement path, not a
//!   set of arbitrary nearby states.
//!
//! Enumeration order is part of each relation's contract: the
//! stochastic algorithms take acceptance decisions mid-scan, so a
//! reordered neighborhood would change their trajectories.

mod kernighan_lin;
mod kflip;

pub use kernighan_lin::KernighanLinHeuristic;
pub use kflip::{KFlipRelation, SingleFlipRelation};

use crate::graph::PartitionedGraph;

/// Produces the neighborhood of a search state.
///
/// The returned collection is finite and its order is deterministic
/// for a given relation and input state. An input that admits no
/// valid move yields an empty collection rather than an error.
pub trait NeighborhoodRelation {
    /// All neighbor states of `graph`, in the relation's order.
    fn neighbors(&self, graph: &PartitionedGraph) -> Vec<PartitionedGraph>;
}

impl<T: NeighborhoodRelation + ?Sized> NeighborhoodRelation for Box<T> {
    fn neighbors(&self, graph: &PartitionedGraph) -> Vec<PartitionedGraph> {
        (**self).neighbors(graph)
    }
}
