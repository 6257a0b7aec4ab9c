use super::*;
use std::fmt;

/// Undirected simple graph stored as one neighbor vector per node
#[derive(Clone, Default)]
pub struct AdjArray {
    adj: Vec<Vec<Node>>,
    number_of_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // scan the shorter list
        let (a, b) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.adj[a as usize].contains(&b)
    }
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(v < self.number_of_nodes());

        if self.adj[u as usize].contains(&v) {
            return false;
        }

        self.adj[u as usize].push(v);
        self.adj[v as usize].push(u);
        self.number_of_edges += 1;

        true
    }
}

impl AdjArray {
    /// Builds a graph on `n` nodes and rejects edges that are loops or reference unknown
    /// nodes. Duplicate edges are merged.
    pub fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.try_add_checked(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph whose number of nodes is one more than the largest endpoint
    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<Edge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| Into::<Edge>::into(e).normalized().1 + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(n as NumNodes);

        graph.add_edges(edges);

        graph
    }

    /// Returns a copy where node `u` is renamed to `permutation[u]`
    pub fn relabelled(&self, permutation: &[Node]) -> Self {
        assert_eq!(permutation.len(), self.len());
        let mut graph = Self::new(self.number_of_nodes());
        for Edge(u, v) in self.ordered_edges() {
            graph.add_edge(permutation[u as usize], permutation[v as usize]);
        }
        graph
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use super::super::io::DotWriter;
        use std::str;

        let mut buf = Vec::new();
        if self.try_write_dot(&mut buf).is_ok() {
            f.write_str(str::from_utf8(&buf).map_err(|_| fmt::Error)?.trim())?;
        }

        Ok(())
    }
}

super::graph_tests::impl_graph_tests!(AdjArray);
