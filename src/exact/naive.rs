//! Exhaustive reference solvers for small graphs.
//!
//! Sets are represented as bit masks over the nodes; the search only enumerates independent
//! sets and stops a branch once it cannot beat the best set found so far.

use super::*;
use crate::utils::OddIndependentSet;

/// Largest graph accepted by the exhaustive solvers
pub const NAIVE_MAX_NODES: NumNodes = 24;

type Mask = u64;

struct ExhaustiveSearch<'a, F> {
    neighbors: &'a [Mask],
    accept: F,
    best: Mask,
    best_size: u32,
}

impl<F: Fn(Mask) -> bool> ExhaustiveSearch<'_, F> {
    fn recurse(&mut self, node: usize, set: Mask, blocked: Mask) {
        let size = set.count_ones();
        let n = self.neighbors.len();

        if size + (n - node) as u32 <= self.best_size {
            return;
        }

        if node == n {
            if (self.accept)(set) {
                self.best = set;
                self.best_size = size;
            }
            return;
        }

        if blocked & (1 << node) == 0 {
            self.recurse(
                node + 1,
                set | (1 << node),
                blocked | self.neighbors[node],
            );
        }

        self.recurse(node + 1, set, blocked);
    }
}

fn neighbor_masks<G: AdjacencyList>(graph: &G) -> Result<Vec<Mask>, SolverError> {
    let n = graph.number_of_nodes();
    if n > NAIVE_MAX_NODES {
        return Err(SolverError::TooLargeForNaive {
            n,
            limit: NAIVE_MAX_NODES,
        });
    }

    Ok(graph
        .vertices()
        .map(|u| {
            graph
                .neighbors_of(u)
                .iter()
                .fold(0, |mask: Mask, &v| mask | (1 << v))
        })
        .collect())
}

fn best_independent_mask<F: Fn(Mask) -> bool>(neighbors: &[Mask], accept: F) -> Mask {
    let mut search = ExhaustiveSearch {
        neighbors,
        accept,
        best: 0,
        best_size: 0,
    };

    // best starts out as the empty set, which every predicate accepts
    search.recurse(0, 0, 0);
    search.best
}

fn is_odd_mask(neighbors: &[Mask], set: Mask) -> bool {
    neighbors.iter().enumerate().all(|(u, &nbs)| {
        set & (1 << u) != 0 || {
            let count = (nbs & set).count_ones();
            count == 0 || count % 2 == 1
        }
    })
}

/// Computes a maximum odd independent set by exhaustive search
pub fn odd_independent_set_bruteforce<G: AdjacencyList>(
    graph: &G,
) -> Result<OddIndependentSet, SolverError> {
    let neighbors = neighbor_masks(graph)?;
    let best = best_independent_mask(&neighbors, |set| is_odd_mask(&neighbors, set));

    let mut set = OddIndependentSet::new(graph.number_of_nodes());
    set.add_nodes(graph.vertices().filter(|&u| best & (1 << u) != 0));
    Ok(set)
}

/// Computes the odd independence number by exhaustive search.
///
/// # Example
/// ```
/// use aod::prelude::*;
/// assert_eq!(alpha_od_bruteforce(&AdjArray::cycle(6)).unwrap(), 2);
/// ```
pub fn alpha_od_bruteforce<G: AdjacencyList>(graph: &G) -> Result<NumNodes, SolverError> {
    Ok(odd_independent_set_bruteforce(graph)?.len() as NumNodes)
}

/// Computes the independence number by exhaustive search
pub fn independence_number_bruteforce<G: AdjacencyList>(
    graph: &G,
) -> Result<NumNodes, SolverError> {
    let neighbors = neighbor_masks(graph)?;
    Ok(best_independent_mask(&neighbors, |_| true).count_ones())
}
