//! Exact odd independence number via integer linear programming.
//!
//! For every node `u` of a connected graph with `n` nodes the model uses
//!  - `x_u` in {0, 1}: `u` is part of the set `S`,
//!  - `y_u` in {0, 1}: `u` has a neighbor in `S`,
//!  - `z_u` >= 0 integral: parity witness.
//!
//! and maximises `sum x_u` subject to
//!  - `x_u + x_v <= 1` for every edge,
//!  - `sum_{v in N(u)} x_v <= n * y_u`,
//!  - `y_u + sum_{v in N(u)} x_v = 2 * z_u`.
//!
//! The last equation requires the neighbor count plus `y_u` to be even. A count of zero is
//! matched by `y_u = 0`; a positive count forces `y_u = 1` through the second constraint, so
//! the count has to be odd. Nodes of `S` have a count of zero by independence.

use itertools::Itertools;
use log::{debug, trace};

use super::*;
use crate::utils::OddIndependentSet;

/// Maximum odd independent set or the notice that the graph exceeds the ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OddIndependentSetResult {
    Exact(OddIndependentSet),
    TooLarge,
}

impl OddIndependentSetResult {
    pub fn alpha(&self) -> Alpha {
        match self {
            OddIndependentSetResult::Exact(set) => Alpha::Exact(set.len() as NumNodes),
            OddIndependentSetResult::TooLarge => Alpha::TooLarge,
        }
    }

    pub fn set(&self) -> Option<&OddIndependentSet> {
        match self {
            OddIndependentSetResult::Exact(set) => Some(set),
            OddIndependentSetResult::TooLarge => None,
        }
    }
}

/// Computes the odd independence number with the default backend and configuration.
///
/// # Example
/// ```
/// use aod::prelude::*;
/// let two_triangles = AdjArray::complete(3).disjoint_union(&AdjArray::complete(3));
/// assert_eq!(alpha_od(&two_triangles).unwrap(), Alpha::Exact(2));
/// ```
pub fn alpha_od<G: FullfledgedGraph>(graph: &G) -> Result<Alpha, SolverError> {
    alpha_od_with::<DefaultBackend, G>(graph, &SolverConfig::default())
}

pub fn alpha_od_with<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<Alpha, SolverError> {
    Ok(solve_odd_independent_set::<B, G>(graph, config)?.alpha())
}

/// Computes a maximum odd independent set. Trivial graphs are answered directly, graphs
/// above `config.max_nodes` are rejected as too large, and disconnected graphs are solved
/// per connected component.
pub fn solve_odd_independent_set<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<OddIndependentSetResult, SolverError> {
    let n = graph.number_of_nodes();
    let mut set = OddIndependentSet::new(n);

    // every node may be taken if there are no edges; this includes n <= 1
    if n <= 1 || graph.is_edgeless() {
        set.add_nodes(graph.vertices());
        return Ok(OddIndependentSetResult::Exact(set));
    }

    if n > config.max_nodes {
        debug!(
            "Graph with n={n} exceeds ceiling of {} nodes; skip exact solve",
            config.max_nodes
        );
        return Ok(OddIndependentSetResult::TooLarge);
    }

    let nodes = if graph.is_connected() {
        odd_independent_set_ilp::<B, G>(graph, config)?.sorted()
    } else {
        let solution = solve_by_components(graph, |component| {
            Ok(
                match solve_odd_independent_set::<B, G>(component, config)? {
                    OddIndependentSetResult::Exact(set) => Some(set.sorted()),
                    OddIndependentSetResult::TooLarge => None,
                },
            )
        })?;

        match solution {
            Some(nodes) => nodes,
            None => return Ok(OddIndependentSetResult::TooLarge),
        }
    };

    set.add_nodes(nodes);
    Ok(OddIndependentSetResult::Exact(set))
}

/// Solves the ILP formulation on the whole graph, without shortcuts for trivial graphs,
/// without the tractability ceiling and without splitting into components.
pub fn odd_independent_set_ilp<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<OddIndependentSet, SolverError> {
    let mut backend = B::default();
    let membership = build_odd_independence_model(&mut backend, graph);

    debug!(
        "Solve odd independence model for n={}, m={} with {}: {} variables, {} constraints",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        backend.name(),
        backend.number_of_variables(),
        backend.number_of_constraints()
    );

    let solution = backend.solve(config.timeout)?;

    let mut set = OddIndependentSet::new(graph.number_of_nodes());
    set.add_nodes(
        graph
            .vertices()
            .filter(|&u| solution.is_set(membership[u as usize])),
    );

    trace!("Extracted set {:?}", set.sorted());

    if (solution.objective() - set.len() as f64).abs() > 0.5 {
        return Err(SolverError::ObjectiveMismatch {
            objective: solution.objective(),
            size: set.len() as NumNodes,
        });
    }

    if config.verify && !set.is_valid(graph) {
        return Err(SolverError::InvalidSolution {
            nodes: set.sorted(),
        });
    }

    Ok(set)
}

/// Adds the odd independence model of `graph` to `backend` and returns the membership
/// variables `x_u` indexed by node.
pub fn build_odd_independence_model<B: IlpBackend, G: AdjacencyList>(
    backend: &mut B,
    graph: &G,
) -> Vec<VarId> {
    let n = graph.number_of_nodes() as f64;

    let x = graph
        .vertices()
        .map(|_| backend.add_binary_var())
        .collect_vec();

    for u in graph.vertices() {
        for &v in graph.neighbors_of(u) {
            if u < v {
                backend.add_constraint(
                    &[(x[u as usize], 1.0), (x[v as usize], 1.0)],
                    ConstraintBound::AtMost(1.0),
                );
            }
        }
    }

    let mut terms = Vec::with_capacity(graph.max_degree() as usize + 2);
    for u in graph.vertices() {
        let degree = graph.degree_of(u);
        if degree == 0 {
            // y_u and z_u are fixed to zero for isolated nodes
            backend.add_integer_var(0.0, 0.0);
            backend.add_integer_var(0.0, 0.0);
            continue;
        }

        let y = backend.add_binary_var();
        let z = backend.add_integer_var(0.0, degree.div_ceil(2) as f64);

        terms.clear();
        terms.extend(graph.neighbors_of(u).iter().map(|&v| (x[v as usize], 1.0)));

        // sum x_v - n * y_u <= 0
        terms.push((y, -n));
        backend.add_constraint(&terms, ConstraintBound::AtMost(0.0));

        // sum x_v + y_u - 2 * z_u = 0
        terms.pop();
        terms.push((y, 1.0));
        terms.push((z, -2.0));
        backend.add_constraint(&terms, ConstraintBound::Exactly(0.0));
    }

    let objective = x.iter().map(|&v| (v, 1.0)).collect_vec();
    backend.set_objective(Sense::Maximise, &objective);

    x
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;
    use rayon::prelude::*;
    use std::{cell::RefCell, time::Duration};

    fn solve(graph: &AdjArray) -> Alpha {
        alpha_od(graph).unwrap()
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(solve(&AdjArray::new(0)), Alpha::Exact(0));
        assert_eq!(solve(&AdjArray::new(1)), Alpha::Exact(1));
        for n in 2..50 {
            assert_eq!(solve(&AdjArray::edgeless(n)), Alpha::Exact(n));
        }
    }

    #[test]
    fn complete_graphs() {
        for n in 2..12 {
            assert_eq!(solve(&AdjArray::complete(n)), Alpha::Exact(1));
        }
    }

    #[test]
    fn c4_and_its_square() {
        let c4 = AdjArray::cycle(4);
        assert_eq!(solve(&c4), Alpha::Exact(1));
        assert_eq!(independence_number(&c4.square()).unwrap(), Alpha::Exact(1));
    }

    #[test]
    fn disjoint_triangles() {
        let graph = AdjArray::complete(3).disjoint_union(&AdjArray::complete(3));
        assert_eq!(solve(&graph), Alpha::Exact(2));

        let result =
            solve_odd_independent_set::<DefaultBackend, _>(&graph, &SolverConfig::default())
                .unwrap();
        let set = result.set().unwrap();
        assert!(set.is_valid(&graph));
        assert_eq!(set.iter().filter(|&u| u < 3).count(), 1);
    }

    #[test]
    fn stars_and_cycles() {
        // leaves are an odd independent set iff their number is odd
        assert_eq!(solve(&AdjArray::star(3)), Alpha::Exact(3));
        assert_eq!(solve(&AdjArray::star(4)), Alpha::Exact(3));
        assert_eq!(solve(&AdjArray::cycle(6)), Alpha::Exact(2));
        assert_eq!(solve(&AdjArray::path(3)), Alpha::Exact(1));
    }

    #[test]
    fn ceiling() {
        let path = AdjArray::path(41);
        assert_eq!(solve(&path), Alpha::TooLarge);

        let config = SolverConfig::default().with_max_nodes(5);
        let graph = AdjArray::path(3).disjoint_union(&AdjArray::path(3));
        assert_eq!(
            alpha_od_with::<DefaultBackend, _>(&graph, &config).unwrap(),
            Alpha::TooLarge
        );

        // the ceiling does not apply to trivial graphs
        assert_eq!(solve(&AdjArray::edgeless(100)), Alpha::Exact(100));

        let config = SolverConfig::default().with_max_nodes(6);
        assert_eq!(
            alpha_od_with::<DefaultBackend, _>(&graph, &config).unwrap(),
            Alpha::Exact(2)
        );
    }

    #[test]
    fn isolated_nodes_join_components() {
        let mut graph = AdjArray::new(8);
        graph.add_edges([(0, 1), (1, 2), (4, 5), (5, 6), (6, 4)]);
        // P3 contributes 1, triangle 1, and nodes 3 and 7 are isolated
        assert_eq!(solve(&graph), Alpha::Exact(4));
    }

    #[test]
    fn general_path_agrees_with_fast_path() {
        let config = SolverConfig::default();
        for n in 0..6 {
            let graph = AdjArray::edgeless(n);
            let general = odd_independent_set_ilp::<DefaultBackend, _>(&graph, &config).unwrap();
            assert_eq!(Alpha::Exact(general.len() as NumNodes), solve(&graph));
        }

        let graph = AdjArray::cycle(5).disjoint_union(&AdjArray::star(3));
        let general = odd_independent_set_ilp::<DefaultBackend, _>(&graph, &config).unwrap();
        assert_eq!(Alpha::Exact(general.len() as NumNodes), solve(&graph));
    }

    #[test]
    fn model_size() {
        let mut backend = HighsBackend::default();
        let graph = AdjArray::path(4);
        let x = build_odd_independence_model(&mut backend, &graph);
        assert_eq!(x.len(), 4);
        assert_eq!(backend.number_of_variables(), 12);
        assert_eq!(backend.number_of_constraints(), 3 + 2 * 4);
    }

    #[test]
    fn cross_with_naive() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1234567);
        let graphs = (0..400)
            .map(|i| {
                let n = rng.gen_range(0..=12);
                let p = [0.1, 0.2, 0.35, 0.5, 0.8][i % 5];
                AdjArray::random_gnp(&mut rng, n, p)
            })
            .collect_vec();

        graphs.par_iter().for_each(|graph| {
            let naive = alpha_od_bruteforce(graph).unwrap();
            let ilp = solve(graph);
            assert_eq!(ilp, Alpha::Exact(naive), "{graph:?}");
        });
    }

    #[test]
    fn inequality_chain() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xfeed);
        for _ in 0..100 {
            let n = rng.gen_range(1..=16);
            let p = (3.0 / n as f64).min(1.0);
            let graph = AdjArray::random_gnp(&mut rng, n, p);

            let alpha = independence_number(&graph).unwrap().value().unwrap();
            let alpha_od = solve(&graph).value().unwrap();
            let alpha_square = independence_number(&graph.square())
                .unwrap()
                .value()
                .unwrap();

            assert!(alpha >= alpha_od, "{graph:?}");
            assert!(alpha_od >= alpha_square, "{graph:?}");
        }
    }

    #[test]
    fn deterministic_and_label_invariant() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xdead);
        for _ in 0..30 {
            let n = rng.gen_range(2..=14);
            let graph = AdjArray::random_gnp(&mut rng, n, 0.3);

            let first = solve(&graph);
            assert_eq!(first, solve(&graph));

            let mut permutation = graph.vertices().collect_vec();
            permutation.shuffle(&mut rng);
            assert_eq!(first, solve(&graph.relabelled(&permutation)));
        }
    }

    #[test]
    fn named_graphs() {
        let petersen = AdjArray::kneser(5, 2);
        assert_eq!(
            solve(&petersen),
            Alpha::Exact(alpha_od_bruteforce(&petersen).unwrap())
        );

        let grid = AdjArray::path(3).cartesian_product(&AdjArray::path(3));
        assert_eq!(
            solve(&grid),
            Alpha::Exact(alpha_od_bruteforce(&grid).unwrap())
        );

        let wheel = AdjArray::wheel(6);
        assert_eq!(
            solve(&wheel),
            Alpha::Exact(alpha_od_bruteforce(&wheel).unwrap())
        );
    }

    /// What [`ScriptedBackend::solve`] returns on the current thread
    #[derive(Clone)]
    enum Outcome {
        /// every variable at 1 and the objective equal to the number of nodes
        SelectAll,
        /// every variable at 0 with the given objective
        Objective(f64),
        Fail(SolverError),
    }

    thread_local! {
        static OUTCOME: RefCell<Outcome> = const { RefCell::new(Outcome::SelectAll) };
    }

    /// Records the model sizes and answers with the outcome of the calling thread
    #[derive(Default)]
    struct ScriptedBackend {
        variables: usize,
        constraints: usize,
    }

    impl IlpBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn add_binary_var(&mut self) -> VarId {
            self.variables += 1;
            VarId(self.variables - 1)
        }

        fn add_integer_var(&mut self, _lower: f64, _upper: f64) -> VarId {
            self.add_binary_var()
        }

        fn add_constraint(&mut self, _terms: &[(VarId, f64)], _bound: ConstraintBound) {
            self.constraints += 1;
        }

        fn set_objective(&mut self, _sense: Sense, _terms: &[(VarId, f64)]) {}

        fn number_of_variables(&self) -> usize {
            self.variables
        }

        fn number_of_constraints(&self) -> usize {
            self.constraints
        }

        fn solve(self, _timeout: Option<Duration>) -> Result<IlpSolution, SolverError> {
            // x, y and z per node
            let nodes = (self.variables / 3) as f64;
            match OUTCOME.with(|o| o.borrow().clone()) {
                Outcome::SelectAll => Ok(IlpSolution::new(vec![1.0; self.variables], nodes)),
                Outcome::Objective(objective) => {
                    Ok(IlpSolution::new(vec![0.0; self.variables], objective))
                }
                Outcome::Fail(error) => Err(error),
            }
        }
    }

    fn scripted(outcome: Outcome, graph: &AdjArray, verify: bool) -> Result<Alpha, SolverError> {
        OUTCOME.with(|o| *o.borrow_mut() = outcome);
        let config = SolverConfig::default().with_verification(verify);
        alpha_od_with::<ScriptedBackend, _>(graph, &config)
    }

    #[test]
    fn backend_errors_reach_the_caller() {
        let connected = AdjArray::path(3);
        let split = AdjArray::path(3).disjoint_union(&AdjArray::cycle(4));
        assert!(!split.is_connected());

        for graph in [&connected, &split] {
            for error in [SolverError::Infeasible, SolverError::Timeout] {
                assert_eq!(
                    scripted(Outcome::Fail(error.clone()), graph, true),
                    Err(error)
                );
            }
        }
    }

    #[test]
    fn invalid_solutions_are_rejected() {
        let connected = AdjArray::path(3);
        assert_eq!(
            scripted(Outcome::SelectAll, &connected, true),
            Err(SolverError::InvalidSolution {
                nodes: vec![0, 1, 2]
            })
        );

        // the first component already fails
        let split = AdjArray::path(3).disjoint_union(&AdjArray::complete(3));
        assert!(matches!(
            scripted(Outcome::SelectAll, &split, true),
            Err(SolverError::InvalidSolution { .. })
        ));

        // without verification the extracted sets are taken as they are
        assert_eq!(
            scripted(Outcome::SelectAll, &connected, false),
            Ok(Alpha::Exact(3))
        );
        assert_eq!(
            scripted(Outcome::SelectAll, &split, false),
            Ok(Alpha::Exact(6))
        );
    }

    #[test]
    fn objective_must_match_extracted_set() {
        for verify in [true, false] {
            assert_eq!(
                scripted(Outcome::Objective(2.0), &AdjArray::cycle(5), verify),
                Err(SolverError::ObjectiveMismatch {
                    objective: 2.0,
                    size: 0
                })
            );
        }

        let split = AdjArray::cycle(5).disjoint_union(&AdjArray::star(3));
        assert!(matches!(
            scripted(Outcome::Objective(1.0), &split, true),
            Err(SolverError::ObjectiveMismatch { size: 0, .. })
        ));

        // an empty set with objective 0 is accepted
        assert_eq!(
            scripted(Outcome::Objective(0.0), &split, true),
            Ok(Alpha::Exact(0))
        );
    }
}
