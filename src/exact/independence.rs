use itertools::Itertools;
use log::debug;

use super::*;

/// Computes the independence number with the default backend and configuration
pub fn independence_number<G: FullfledgedGraph>(graph: &G) -> Result<Alpha, SolverError> {
    independence_number_with::<DefaultBackend, G>(graph, &SolverConfig::default())
}

pub fn independence_number_with<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<Alpha, SolverError> {
    Ok(match maximum_independent_set::<B, G>(graph, config)? {
        Some(set) => Alpha::Exact(set.len() as NumNodes),
        None => Alpha::TooLarge,
    })
}

/// Computes a maximum independent set, or `None` if the graph exceeds `config.max_nodes`.
/// Uses the same shortcuts and decomposition as the odd independence solver.
pub fn maximum_independent_set<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<Option<Vec<Node>>, SolverError> {
    let n = graph.number_of_nodes();

    if graph.is_edgeless() {
        return Ok(Some(graph.vertices().collect()));
    }

    if n > config.max_nodes {
        debug!(
            "Graph with n={n} exceeds ceiling of {} nodes; skip exact solve",
            config.max_nodes
        );
        return Ok(None);
    }

    if graph.is_connected() {
        return independent_set_ilp::<B, G>(graph, config).map(Some);
    }

    solve_by_components(graph, |component| {
        maximum_independent_set::<B, G>(component, config)
    })
}

fn independent_set_ilp<B: IlpBackend, G: FullfledgedGraph>(
    graph: &G,
    config: &SolverConfig,
) -> Result<Vec<Node>, SolverError> {
    let mut backend = B::default();

    let x = graph
        .vertices()
        .map(|_| backend.add_binary_var())
        .collect_vec();

    for Edge(u, v) in graph.ordered_edges() {
        backend.add_constraint(
            &[(x[u as usize], 1.0), (x[v as usize], 1.0)],
            ConstraintBound::AtMost(1.0),
        );
    }

    backend.set_objective(
        Sense::Maximise,
        &x.iter().map(|&v| (v, 1.0)).collect_vec(),
    );

    debug!(
        "Solve independence model for n={}, m={} with {}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        backend.name()
    );

    let solution = backend.solve(config.timeout)?;
    let set = graph
        .vertices()
        .filter(|&u| solution.is_set(x[u as usize]))
        .collect_vec();

    if config.verify
        && set
            .iter()
            .tuple_combinations()
            .any(|(&u, &v)| graph.has_edge(u, v))
    {
        return Err(SolverError::InvalidSolution { nodes: set });
    }

    Ok(set)
}
