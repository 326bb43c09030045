//! Cut cost evaluation.

use super::partitioned::PartitionedGraph;

/// Evaluates the objective value of a search state.
///
/// Implementations must be pure: the same state always yields the
/// same cost, and evaluation never mutates anything. This is what
/// allows candidate costs to be computed in any order, or in
/// parallel under the `parallel` feature, without changing search
/// behavior.
pub trait CostModel: Send + Sync {
    /// Cost of a state. Higher is better for Max-Cut.
    fn cost(&self, graph: &PartitionedGraph) -> f64;
}

/// The Max-Cut objective: total weight of edges crossing the cut.
///
/// Edges whose endpoints share a label contribute nothing. A graph
/// with no cross edges, including one where a partition is empty,
/// has cost zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CutWeight;

impl CostModel for CutWeight {
    fn cost(&self, graph: &PartitionedGraph) -> f64 {
        graph
            .topology()
            .edges()
            .iter()
            .filter(|edge| graph.label(edge.u) != graph.label(edge.v))
            .map(|edge| edge.weight)
            .sum()
    }
}
