use super::*;

/// Undirected edge between two nodes; graphs report edges with the smaller endpoint first
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// Returns the edge with the smaller endpoint first
    pub fn normalized(self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    pub fn is_loop(self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(&(u, v): &(Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl From<Edge> for (Node, Node) {
    fn from(Edge(u, v): Edge) -> Self {
        (u, v)
    }
}
