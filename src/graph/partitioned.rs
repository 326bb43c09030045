//! Partitioned graph states and their shared topology.

use std::sync::Arc;

/// One of the two sides of a cut.
///
/// Every node of a [`PartitionedGraph`] carries exactly one label;
/// the cut is defined by the label assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Partition {
    P1,
    P2,
}

impl Partition {
    /// The other side of the cut.
    pub fn opposite(self) -> Self {
        match self {
            Partition::P1 => Partition::P2,
            Partition::P2 => Partition::P1,
        }
    }
}

/// A weighted undirected edge between two node ids.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight. The instance generator draws weights from `[0, 1)`;
    /// the model accepts any finite weight.
    pub weight: f64,
}

/// Immutable structure of a graph: node count and weighted edges.
///
/// Node ids are the contiguous range `0..node_count`. A topology is
/// built once per instance and shared by every search state derived
/// from it, so candidate generation never copies the edge list.
#[derive(Debug)]
pub struct GraphTopology {
    node_count: usize,
    edges: Vec<Edge>,
}

impl GraphTopology {
    /// Builds a topology, checking that every edge endpoint references
    /// an existing node and that every weight is finite.
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self, String> {
        for edge in &edges {
            if edge.u >= node_count || edge.v >= node_count {
                return Err(format!(
                    "edge ({}, {}) references a node outside 0..{node_count}",
                    edge.u, edge.v
                ));
            }
            if !edge.weight.is_finite() {
                return Err(format!(
                    "edge ({}, {}) has non-finite weight {}",
                    edge.u, edge.v, edge.weight
                ));
            }
        }
        Ok(Self { node_count, edges })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The edge list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A search state: a shared topology plus one partition label per node.
///
/// States have value semantics. [`PartitionedGraph::with_labels`]
/// produces a new state sharing the same topology; the original is
/// never touched. Equality compares the label vector only, so two
/// states with identical labelings are the same search state even if
/// their transient mark flags differ.
#[derive(Debug, Clone)]
pub struct PartitionedGraph {
    topology: Arc<GraphTopology>,
    labels: Vec<Partition>,
    marked: Vec<bool>,
}

impl PartitionedGraph {
    /// Creates a state over `topology` with the given label per node.
    ///
    /// # Panics
    ///
    /// Panics if the label vector length does not match the node count.
    pub fn new(topology: Arc<GraphTopology>, labels: Vec<Partition>) -> Self {
        assert_eq!(
            labels.len(),
            topology.node_count(),
            "label vector length must equal the node count"
        );
        let marked = vec![false; labels.len()];
        Self {
            topology,
            labels,
            marked,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    /// The shared topology.
    pub fn topology(&self) -> &Arc<GraphTopology> {
        &self.topology
    }

    /// Label of one node.
    pub fn label(&self, node: usize) -> Partition {
        self.labels[node]
    }

    /// The full label vector, indexed by node id.
    pub fn labels(&self) -> &[Partition] {
        &self.labels
    }

    /// A new state with the same topology and the given labels.
    ///
    /// Mark flags carry over from `self`: marking is trajectory state
    /// owned by the Kernighan-Lin heuristic and must survive the
    /// label rewrite of each of its steps.
    pub fn with_labels(&self, labels: Vec<Partition>) -> Self {
        assert_eq!(
            labels.len(),
            self.labels.len(),
            "label vector length must equal the node count"
        );
        Self {
            topology: Arc::clone(&self.topology),
            labels,
            marked: self.marked.clone(),
        }
    }

    /// Node ids labeled `side`, in ascending id order.
    pub fn members(&self, side: Partition) -> Vec<usize> {
        (0..self.labels.len())
            .filter(|&node| self.labels[node] == side)
            .collect()
    }

    /// Unmarked node ids labeled `side`, in ascending id order.
    pub(crate) fn unmarked_members(&self, side: Partition) -> Vec<usize> {
        (0..self.labels.len())
            .filter(|&node| self.labels[node] == side && !self.marked[node])
            .collect()
    }

    /// Whether a node carries the transient mark flag. Marks are set
    /// only along Kernighan-Lin trajectories and are never part of
    /// state identity.
    pub fn is_marked(&self, node: usize) -> bool {
        self.marked[node]
    }

    pub(crate) fn mark(&mut self, node: usize) {
        self.marked[node] = true;
    }

    pub(crate) fn clear_marks(&mut self) {
        self.marked.fill(false);
    }

    pub(crate) fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }
}

impl PartialEq for PartitionedGraph {
    /// Two states are equal when their labelings are equal; mark flags
    /// are transient and never part of state identity.
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for PartitionedGraph {}
