//! Random instance generation.

use crate::graph::{Edge, GraphTopology, Partition, PartitionedGraph};
use rand::Rng;
use std::sync::Arc;

/// Draws a G(n, p) instance: every unordered node pair becomes an
/// edge with probability `edge_probability`, each edge weight is
/// uniform in `[0, 1)`, and each node lands in either partition with
/// probability 1/2.
pub fn random_instance<R: Rng>(
    node_count: usize,
    edge_probability: f64,
    rng: &mut R,
) -> PartitionedGraph {
    let mut edges = Vec::new();
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            if rng.random::<f64>() < edge_probability {
                edges.push(Edge {
                    u,
                    v,
                    weight: rng.random::<f64>(),
                });
            }
        }
    }

    let labels = (0..node_count)
        .map(|_| {
            if rng.random_bool(0.5) {
                Partition::P1
            } else {
                Partition::P2
            }
        })
        .collect();

    let topology =
        GraphTopology::new(node_count, edges).expect("generated instance is consistent");
    PartitionedGraph::new(Arc::new(topology), labels)
}
