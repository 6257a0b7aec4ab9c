use super::*;

pub trait Connectivity: AdjacencyList {
    /// Returns the connected components as lists of nodes. Components are ordered by their
    /// smallest node and the nodes within a component are sorted increasingly.
    fn connected_components(&self) -> Vec<Vec<Node>>;

    /// Returns true if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn connected_components(&self) -> Vec<Vec<Node>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut components = Vec::new();
        let mut bfs = self.bfs(0);

        loop {
            let mut class: Vec<Node> = bfs.by_ref().collect();
            class.sort_unstable();
            components.push(class);

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        components
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connected_components() {
        let mut graph = AdjArray::new(7);
        graph.add_edges([(1, 2), (2, 3), (4, 5)]);

        let comps = graph.connected_components();
        assert_eq!(comps, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert!(!graph.is_connected());

        graph.add_edges([(0, 1), (3, 4), (5, 6)]);
        assert_eq!(graph.connected_components().len(), 1);
        assert!(graph.is_connected());
    }

    #[test]
    fn trivial_graphs() {
        assert!(AdjArray::new(0).connected_components().is_empty());
        assert!(AdjArray::new(0).is_connected());
        assert!(AdjArray::new(1).is_connected());
        assert!(!AdjArray::new(2).is_connected());
    }
}
