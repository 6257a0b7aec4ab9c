use super::*;
use itertools::Itertools;

/// Constructors for a few well-known graph families and graph operations
pub trait GraphFamilies: AdjacencyList + GraphEdgeEditing {
    /// `n` nodes without any edge
    fn edgeless(n: NumNodes) -> Self {
        Self::new(n)
    }

    /// The path `0 - 1 - ... - (n-1)`
    fn path(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges((1..n).map(|v| (v - 1, v)));
        graph
    }

    /// The cycle `0 - 1 - ... - (n-1) - 0`; for `n < 3` this degenerates to a path
    fn cycle(n: NumNodes) -> Self {
        let mut graph = Self::path(n);
        if n >= 3 {
            graph.add_edge(n - 1, 0);
        }
        graph
    }

    /// The complete graph `K_n`
    fn complete(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges((0..n).tuple_combinations::<(_, _)>());
        graph
    }

    /// The star with center `0` and `leaves` further nodes
    fn star(leaves: NumNodes) -> Self {
        let mut graph = Self::new(leaves + 1);
        graph.add_edges((1..=leaves).map(|v| (0, v)));
        graph
    }

    /// The wheel with hub `0` connected to all nodes of a cycle `1..=rim`
    fn wheel(rim: NumNodes) -> Self {
        let mut graph = Self::star(rim);
        graph.add_edges((2..=rim).map(|v| (v - 1, v)));
        if rim >= 3 {
            graph.add_edge(rim, 1);
        }
        graph
    }

    /// The Kneser graph `K(n, k)`: nodes are the `k`-subsets of `{0, .., n-1}` in
    /// lexicographic order; two nodes are adjacent iff their subsets are disjoint.
    fn kneser(n: NumNodes, k: NumNodes) -> Self {
        let subsets = (0..n).combinations(k as usize).collect_vec();
        let mut graph = Self::new(subsets.len() as NumNodes);

        for ((i, a), (j, b)) in subsets.iter().enumerate().tuple_combinations() {
            if a.iter().all(|x| !b.contains(x)) {
                graph.add_edge(i as Node, j as Node);
            }
        }

        graph
    }

    /// Returns a graph containing `self` on nodes `0..n` and `other` shifted behind it
    fn disjoint_union(&self, other: &Self) -> Self {
        let shift = self.number_of_nodes();
        let mut graph = Self::new(shift + other.number_of_nodes());
        graph.add_edges(self.ordered_edges());
        graph.add_edges(
            other
                .ordered_edges()
                .map(|Edge(u, v)| Edge(u + shift, v + shift)),
        );
        graph
    }

    /// The Cartesian product; node `(a, b)` is numbered `a * |V(other)| + b`
    fn cartesian_product(&self, other: &Self) -> Self {
        let m = other.number_of_nodes();
        let mut graph = Self::new(self.number_of_nodes() * m);

        for a in self.vertices() {
            for Edge(b1, b2) in other.ordered_edges() {
                graph.add_edge(a * m + b1, a * m + b2);
            }
        }
        for Edge(a1, a2) in self.ordered_edges() {
            for b in other.vertices() {
                graph.add_edge(a1 * m + b, a2 * m + b);
            }
        }

        graph
    }
}

impl<G: AdjacencyList + GraphEdgeEditing> GraphFamilies for G {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(AdjArray::path(5).number_of_edges(), 4);
        assert_eq!(AdjArray::cycle(5).number_of_edges(), 5);
        assert_eq!(AdjArray::cycle(2).number_of_edges(), 1);
        assert_eq!(AdjArray::complete(6).number_of_edges(), 15);
        assert_eq!(AdjArray::star(4).number_of_nodes(), 5);
        assert_eq!(AdjArray::star(4).degree_of(0), 4);
        assert_eq!(AdjArray::wheel(5).number_of_edges(), 10);
        assert_eq!(AdjArray::edgeless(7).number_of_edges(), 0);
    }

    #[test]
    fn petersen() {
        let petersen = AdjArray::kneser(5, 2);
        assert_eq!(petersen.number_of_nodes(), 10);
        assert_eq!(petersen.number_of_edges(), 15);
        assert!(petersen.degrees().all(|d| d == 3));
    }

    #[test]
    fn union_and_product() {
        let two_triangles = AdjArray::complete(3).disjoint_union(&AdjArray::complete(3));
        assert_eq!(two_triangles.number_of_nodes(), 6);
        assert_eq!(two_triangles.number_of_edges(), 6);
        assert_eq!(two_triangles.connected_components().len(), 2);

        // the 3x4 grid
        let grid = AdjArray::path(3).cartesian_product(&AdjArray::path(4));
        assert_eq!(grid.number_of_nodes(), 12);
        assert_eq!(grid.number_of_edges(), 3 * 3 + 2 * 4);
        assert!(grid.has_edge(0, 1));
        assert!(grid.has_edge(0, 4));
        assert!(!grid.has_edge(3, 4));
    }
}
