//! Weighted two-partition graph model.
//!
//! A Max-Cut search state is a [`PartitionedGraph`]: an immutable
//! weighted topology shared behind an [`std::sync::Arc`] plus one
//! partition label per node. Neighbor generation never mutates an
//! existing state; it produces new states that share the topology and
//! differ only in their label vector, so a candidate costs O(nodes)
//! to materialize instead of O(nodes + edges).
//!
//! The cut objective lives here as well: [`CutWeight`] implements
//! [`CostModel`] by summing the weights of edges whose endpoints lie
//! in different partitions.

mod cost;
mod partitioned;

pub use cost::{CostModel, CutWeight};
pub use partitioned::{Edge, GraphTopology, Partition, PartitionedGraph};
