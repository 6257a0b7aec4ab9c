//! Distances and graph powers.
//!
//! The `k`-th power `G^k` of a graph `G` has the same nodes as `G` and connects two distinct
//! nodes iff their distance in `G` is at most `k`. Nodes of different connected components
//! have infinite distance and thus never become adjacent.

use super::*;
use log::trace;

/// Computes the matrix of pairwise BFS distances; `None` denotes unreachable pairs.
pub fn all_pairs_distances<G: AdjacencyList>(graph: &G) -> Vec<Vec<Option<NumNodes>>> {
    graph
        .vertices()
        .map(|u| graph.distances_from(u, None))
        .collect()
}

/// Computes the `k`-th power of `graph`. Fails for `k = 0`.
pub fn graph_power<G>(graph: &G, k: NumNodes) -> Result<G, GraphError>
where
    G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder,
{
    if k == 0 {
        return Err(GraphError::InvalidPowerExponent);
    }

    Ok(power_impl(graph, k))
}

fn power_impl<G>(graph: &G, k: NumNodes) -> G
where
    G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder,
{
    let mut result = G::new(graph.number_of_nodes());

    for u in graph.vertices() {
        // only pairs (u, v) with u < v are inserted, so each pair is considered once
        for (v, dist) in graph.distances_from(u, Some(k)).into_iter().enumerate() {
            let v = v as Node;
            if u < v && dist.is_some() {
                result.add_edge(u, v);
            }
        }
    }

    trace!(
        "Power {k} of graph with n={} has {} edges",
        graph.number_of_nodes(),
        result.number_of_edges()
    );

    result
}

/// Shorthand for the square `G^2`
pub fn graph_square<G>(graph: &G) -> G
where
    G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder,
{
    power_impl(graph, 2)
}

pub trait GraphPower: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder {
    fn power(&self, k: NumNodes) -> Result<Self, GraphError> {
        graph_power(self, k)
    }

    fn square(&self) -> Self {
        graph_square(self)
    }
}

impl<G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder> GraphPower for G {}
