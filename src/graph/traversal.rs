use super::*;
use std::collections::VecDeque;

////////////////////////////////////////////////////////////////////////////////////////// BFS
pub struct BFS<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: Vec<bool>,
    num_visited: usize,
    queue: VecDeque<Node>,
}

impl<G: AdjacencyList> Iterator for BFS<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.queue.push_back(v);
                self.visited[v as usize] = true;
                self.num_visited += 1;
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.num_visited + self.queue.len()),
        )
    }
}

impl<'a, G: AdjacencyList> BFS<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            num_visited: 1,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.visited.iter().position(|&x| !x) {
            None => false,
            Some(x) => {
                self.visited[x] = true;
                self.num_visited += 1;
                self.queue.push_back(x as Node);
                true
            }
        }
    }
}

pub trait Traversal: AdjacencyList + Sized {
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the BFS distance of every node from `start`; unreachable nodes are `None`.
    /// If `max_depth` is given, nodes further away than `max_depth` are reported as `None`.
    fn distances_from(&self, start: Node, max_depth: Option<NumNodes>) -> Vec<Option<NumNodes>> {
        let mut distances = vec![None; self.len()];
        distances[start as usize] = Some(0);

        let mut queue = VecDeque::from(vec![start]);
        while let Some(u) = queue.pop_front() {
            let next = distances[u as usize].map_or(0, |d| d + 1);
            if max_depth.is_some_and(|depth| next > depth) {
                continue;
            }

            for &v in self.neighbors_of(u) {
                if distances[v as usize].is_none() {
                    distances[v as usize] = Some(next);
                    queue.push_back(v);
                }
            }
        }

        distances
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}
