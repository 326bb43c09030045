//! Kernighan-Lin greedy unmarking heuristic.
//!
//! # Reference
//!
//! Kernighan, B. W. & Lin, S. (1970). "An Efficient Heuristic
//! Procedure for Partitioning Graphs", *Bell System Technical
//! Journal* 49(2), 291-307.

use super::kflip::SingleFlipRelation;
use super::NeighborhoodRelation;
use crate::graph::{CostModel, PartitionedGraph};

/// A greedy trajectory of single flips with node marking.
///
/// Starting from the input state with all marks cleared, each step
/// takes the single-flip neighborhood restricted to unmarked nodes,
/// keeps the candidate with the strictly highest cost (first
/// occurrence wins on ties, in the single-flip relation's order),
/// marks the node it flipped, and continues from it. The procedure
/// stops once all but two nodes are marked, so a flip always has an
/// unmarked counterpart left to land on, or earlier when the
/// restricted neighborhood is empty.
///
/// The returned collection is therefore an ordered improvement path
/// of at most `node_count - 2` states, each one flip away from its
/// predecessor, not a set of independent nearby states. The flipped
/// node is recovered by comparing label vectors across matched node
/// ids; that recovery is sound only while steps are single flips.
#[derive(Debug, Clone)]
pub struct KernighanLinHeuristic<C: CostModel> {
    single_flip: SingleFlipRelation,
    cost: C,
}

impl<C: CostModel> KernighanLinHeuristic<C> {
    /// Creates the heuristic; `cost` ranks candidates within a step.
    pub fn new(cost: C) -> Self {
        Self {
            single_flip: SingleFlipRelation::new(),
            cost,
        }
    }
}

impl<C: CostModel> NeighborhoodRelation for KernighanLinHeuristic<C> {
    fn neighbors(&self, graph: &PartitionedGraph) -> Vec<PartitionedGraph> {
        let node_count = graph.node_count();
        let mut trajectory = Vec::new();
        if node_count < 3 {
            return trajectory;
        }

        let mut working = graph.clone();
        working.clear_marks();

        loop {
            let candidates = self.single_flip.neighbors_filtered(&working, true);

            let mut chosen: Option<PartitionedGraph> = None;
            let mut chosen_cost = f64::NEG_INFINITY;
            for candidate in candidates {
                let cost = self.cost.cost(&candidate);
                if cost > chosen_cost {
                    chosen_cost = cost;
                    chosen = Some(candidate);
                }
            }
            let Some(mut next) = chosen else {
                break;
            };

            // Mark, on the new state, every node whose label moved
            // relative to the previous state. A step is one flip, so
            // this marks exactly the flipped node.
            for node in 0..node_count {
                if next.label(node) != working.label(node) {
                    next.mark(node);
                }
            }

            trajectory.push(next.clone());
            working = next;

            if working.marked_count() == node_count - 2 {
                break;
            }
        }

        trajectory
    }
}
