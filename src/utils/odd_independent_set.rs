use crate::graph::*;
use std::io::Write;

/// Returns true iff `set` is an odd independent set of `graph`, i.e. no two nodes of `set`
/// are adjacent and every node outside of `set` has either no or an odd number of
/// neighbors in `set`. Duplicates in `set` are ignored.
///
/// ** Panics if `set` contains a node >= n **
///
/// # Example
/// ```
/// use aod::prelude::*;
/// let path = AdjArray::path(3);
/// assert!(is_odd_independent_set(&path, [1]));
/// assert!(!is_odd_independent_set(&path, [0, 2]));
/// ```
pub fn is_odd_independent_set<G: AdjacencyList>(
    graph: &G,
    set: impl IntoIterator<Item = Node>,
) -> bool {
    let mut in_set = vec![false; graph.len()];
    for u in set {
        in_set[u as usize] = true;
    }

    is_independent_membership(graph, &in_set) && is_oddly_dominated_membership(graph, &in_set)
}

fn is_independent_membership<G: AdjacencyList>(graph: &G, in_set: &[bool]) -> bool {
    graph
        .vertices()
        .filter(|&u| in_set[u as usize])
        .all(|u| graph.neighbors_of(u).iter().all(|&v| !in_set[v as usize]))
}

fn is_oddly_dominated_membership<G: AdjacencyList>(graph: &G, in_set: &[bool]) -> bool {
    graph.vertices().filter(|&v| !in_set[v as usize]).all(|v| {
        let count = graph
            .neighbors_of(v)
            .iter()
            .filter(|&&w| in_set[w as usize])
            .count();
        count == 0 || count % 2 == 1
    })
}

/// A set of nodes of a graph with `number_of_nodes` nodes, kept in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OddIndependentSet {
    in_set: Vec<bool>,
    set: Vec<Node>,
}

impl OddIndependentSet {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            in_set: vec![false; number_of_nodes as usize],
            set: Vec::new(),
        }
    }

    /// Adds a node to the set; adding a node twice has no effect.
    ///
    /// # Example
    /// ```
    /// use aod::utils::OddIndependentSet;
    /// let mut set = OddIndependentSet::new(5);
    /// set.add_node(0);
    /// set.add_node(0);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add_node(&mut self, node: Node) {
        assert!((node as usize) < self.in_set.len());
        if !self.in_set[node as usize] {
            self.in_set[node as usize] = true;
            self.set.push(node);
        }
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    pub fn contains(&self, node: Node) -> bool {
        self.in_set.get(node as usize).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.in_set.len() as NumNodes
    }

    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.set.iter().copied()
    }

    /// Returns the nodes in increasing order
    pub fn sorted(&self) -> Vec<Node> {
        let mut nodes = self.set.clone();
        nodes.sort_unstable();
        nodes
    }

    /// Writes the set size followed by one node per line using 1-based indexing
    ///
    /// ```
    /// use aod::utils::OddIndependentSet;
    /// let mut set = OddIndependentSet::new(5);
    /// set.add_node(2);
    /// set.add_node(4);
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// set.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"2\n3\n5\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(&mut writer, "{}", self.set.len())?;
        for u in &self.set {
            writeln!(&mut writer, "{}", u + 1)?;
        }
        Ok(())
    }

    /// Returns true if no two nodes of the set are adjacent
    pub fn is_independent(&self, graph: &impl AdjacencyList) -> bool {
        debug_assert_eq!(graph.len(), self.in_set.len());
        is_independent_membership(graph, &self.in_set)
    }

    /// Returns true if every node outside the set has zero or an odd number of neighbors in it
    pub fn is_oddly_dominated(&self, graph: &impl AdjacencyList) -> bool {
        debug_assert_eq!(graph.len(), self.in_set.len());
        is_oddly_dominated_membership(graph, &self.in_set)
    }

    /// Returns true if the set is an odd independent set of `graph`
    pub fn is_valid(&self, graph: &impl AdjacencyList) -> bool {
        graph.len() == self.in_set.len()
            && self.is_independent(graph)
            && self.is_oddly_dominated(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn empty_set_is_always_valid() {
        assert!(is_odd_independent_set(&AdjArray::new(0), []));
        assert!(is_odd_independent_set(&AdjArray::new(5), []));
        assert!(is_odd_independent_set(&AdjArray::path(2), []));

        let mut rng = Pcg64Mcg::seed_from_u64(0x77);
        for _ in 0..100 {
            let n = rng.gen_range(0..10);
            let graph = AdjArray::random_gnp(&mut rng, n, 0.3);
            assert!(is_odd_independent_set(&graph, []));
            assert!(OddIndependentSet::new(n).is_valid(&graph));
        }
    }

    #[test]
    fn independence_violated() {
        let triangle = AdjArray::complete(3);
        assert!(!is_odd_independent_set(&triangle, [0, 1]));
        assert!(is_odd_independent_set(&triangle, [2]));
        assert!(!is_odd_independent_set(&triangle, triangle.vertices()));
    }

    #[test]
    fn even_neighbor_count_rejected() {
        // the center of a star with two leaves sees both leaves
        let star = AdjArray::star(2);
        assert!(!is_odd_independent_set(&star, [1, 2]));
        assert!(is_odd_independent_set(&star, [0]));

        // with three leaves, the center sees an odd number
        let star = AdjArray::star(3);
        assert!(is_odd_independent_set(&star, [1, 2, 3]));
        assert!(!is_odd_independent_set(&star, [1, 2]));
    }

    #[test]
    fn isolated_nodes_are_free() {
        let graph = AdjArray::edgeless(4);
        assert!(is_odd_independent_set(&graph, graph.vertices()));
        assert!(is_odd_independent_set(&graph, [1, 1, 3]));
    }

    #[test]
    fn set_type() {
        let c6 = AdjArray::cycle(6);
        let mut set = OddIndependentSet::new(6);
        set.add_nodes([0, 3]);

        assert!(set.is_independent(&c6));
        // nodes 1, 2, 4, 5 each see exactly one of 0 and 3
        assert!(set.is_oddly_dominated(&c6));
        assert!(set.is_valid(&c6));
        assert_eq!(set.sorted(), [0, 3]);

        set.add_node(2);
        assert!(!set.is_independent(&c6));
        assert!(!set.is_valid(&c6));
        assert!(set.contains(2));
        assert!(!set.contains(1));
        assert!(!set.contains(17));
        assert_eq!(set.iter().collect_vec(), [0, 3, 2]);

        assert!(!set.is_valid(&AdjArray::cycle(7)));
    }
}
