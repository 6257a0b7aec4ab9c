pub mod adj_array;
pub mod connectivity;
pub mod edge;
pub mod families;
pub mod gnp;
pub mod graph_digest;
pub mod power;
pub mod subgraph;
pub mod traversal;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

use std::ops::Range;

pub use adj_array::*;
pub use connectivity::*;
pub use edge::*;
pub use families::*;
pub use gnp::*;
pub use graph_digest::*;
pub use power::*;
pub use subgraph::*;
pub use traversal::*;

pub use crate::errors::GraphError;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in the fixed enumeration order `0..n`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns true if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

#[macro_export]
macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns a slice of neighbors of a given vertex.
    /// ** Panics if the v >= n **
    fn neighbors_of(&self, u: Node) -> &[Node];

    /// Returns the number of neighbors of from [`u`]
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }

    node_iterator!(degrees, degree_of, NumNodes);
    node_iterator!(neighbors, neighbors_of, &[Node]);

    /// Returns the maximum degree, or 0 for the empty graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all edges (u, v) with u < v in lexicographic order
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            let mut upper: Vec<Node> = self
                .neighbors_of(u)
                .iter()
                .copied()
                .filter(|&v| v > u)
                .collect();
            upper.sort_unstable();
            upper.into_iter().map(move |v| Edge(u, v))
        })
    }
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the edge {u, v}
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the undirected edge *{u,v}* to the graph.
    /// ** Panics if the edge is already contained, is a loop, or if u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_add_edge(u, v));
    }

    /// Adds the undirected edge *{u,v}* to the graph.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if the edge is a loop or if u, v >= n **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge *{u,v}* after checking that it is admissible for a simple graph.
    /// Returns whether the edge was new; duplicates are accepted and ignored.
    fn try_add_checked(&mut self, u: Node, v: Node) -> Result<bool, GraphError> {
        let n = self.number_of_nodes();
        for node in [u, v] {
            if node >= n {
                return Err(GraphError::NodeOutOfRange { node, n });
            }
        }
        if Edge(u, v).is_loop() {
            return Err(GraphError::SelfLoop(u));
        }
        Ok(self.try_add_edge(u, v))
    }

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// Everything the solvers need from a graph
pub trait FullfledgedGraph:
    Clone + AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + std::fmt::Debug
{
}

impl<G> FullfledgedGraph for G where
    G: Clone + AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + std::fmt::Debug
{
}
