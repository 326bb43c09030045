//! Flip relations: move subsets of nodes across the cut.

use super::NeighborhoodRelation;
use crate::graph::{Partition, PartitionedGraph};

/// Moves every subset of `1..=k` nodes from one partition to the
/// other, in both directions.
///
/// For each step size `j`, the relation first emits the candidates
/// that move `j` nodes from P1 to P2, then the candidates moving `j`
/// nodes from P2 to P1. Within a direction, the size-`j` subsets of
/// the source partition are enumerated in lexicographic order over
/// ascending node ids, so the neighborhood order is fully
/// deterministic. A direction is skipped whenever the source
/// partition does not keep at least one node behind, so no candidate
/// ever has an empty partition.
///
/// The neighborhood size is `Σ_{j=1..k} C(|P1|, j) + C(|P2|, j)`,
/// exponential in `k`; anything beyond small `k` is only practical
/// on small graphs.
#[derive(Debug, Clone)]
pub struct KFlipRelation {
    k: usize,
}

impl KFlipRelation {
    /// Creates a relation moving up to `k` nodes per candidate.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "flip width k must be at least 1");
        Self { k }
    }

    /// Maximum number of nodes moved per candidate.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Neighborhood enumeration with an optional marked-node filter.
    ///
    /// With `exclude_marked` set, only unmarked nodes are eligible to
    /// move and the pool-size guard applies to the unmarked pool;
    /// every node outside the moved subset keeps its label. The
    /// filter exists for the Kernighan-Lin heuristic and is not part
    /// of the public relation contract.
    pub(crate) fn neighbors_filtered(
        &self,
        graph: &PartitionedGraph,
        exclude_marked: bool,
    ) -> Vec<PartitionedGraph> {
        let mut neighborhood = Vec::new();
        for j in 1..=self.k {
            half_flip(graph, Partition::P1, j, exclude_marked, &mut neighborhood);
            half_flip(graph, Partition::P2, j, exclude_marked, &mut neighborhood);
        }
        neighborhood
    }
}

impl NeighborhoodRelation for KFlipRelation {
    fn neighbors(&self, graph: &PartitionedGraph) -> Vec<PartitionedGraph> {
        self.neighbors_filtered(graph, false)
    }
}

/// Emits all candidates moving a size-`j` subset out of `source`.
fn half_flip(
    graph: &PartitionedGraph,
    source: Partition,
    j: usize,
    exclude_marked: bool,
    out: &mut Vec<PartitionedGraph>,
) {
    let pool = if exclude_marked {
        graph.unmarked_members(source)
    } else {
        graph.members(source)
    };
    // The source side must keep at least one eligible node behind.
    if pool.len() <= j {
        return;
    }
    let target = source.opposite();
    for_each_combination(&pool, j, |subset| {
        let mut labels = graph.labels().to_vec();
        for &node in subset {
            labels[node] = target;
        }
        out.push(graph.with_labels(labels));
    });
}

/// Visits every size-`j` subset of `items` in lexicographic order.
fn for_each_combination(items: &[usize], j: usize, mut visit: impl FnMut(&[usize])) {
    let n = items.len();
    if j == 0 || j > n {
        return;
    }
    let mut indices: Vec<usize> = (0..j).collect();
    let mut subset = vec![0usize; j];
    loop {
        for (slot, &index) in subset.iter_mut().zip(&indices) {
            *slot = items[index];
        }
        visit(&subset);

        // Advance the rightmost index that has room to move.
        let mut position = j;
        while position > 0 && indices[position - 1] == n - j + (position - 1) {
            position -= 1;
        }
        if position == 0 {
            return;
        }
        indices[position - 1] += 1;
        for i in position..j {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

/// Moves exactly one node across the cut per candidate.
///
/// Defined as [`KFlipRelation`] with `k = 1`; kept as a named
/// relation because it is both the baseline of the experiment grid
/// and the building block of the Kernighan-Lin heuristic.
#[derive(Debug, Clone)]
pub struct SingleFlipRelation {
    kflip: KFlipRelation,
}

impl SingleFlipRelation {
    pub fn new() -> Self {
        Self {
            kflip: KFlipRelation::new(1),
        }
    }

    pub(crate) fn neighbors_filtered(
        &self,
        graph: &PartitionedGraph,
        exclude_marked: bool,
    ) -> Vec<PartitionedGraph> {
        self.kflip.neighbors_filtered(graph, exclude_marked)
    }
}

impl Default for SingleFlipRelation {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborhoodRelation for SingleFlipRelation {
    fn neighbors(&self, graph: &PartitionedGraph) -> Vec<PartitionedGraph> {
        self.kflip.neighbors(graph)
    }
}
