pub mod backend;
pub mod cache;
#[cfg(feature = "goodlp")]
pub mod good_lp;
pub mod highs;
pub mod independence;
pub mod naive;
pub mod odd_independence;

pub use backend::*;
pub use cache::*;
#[cfg(feature = "goodlp")]
pub use good_lp::GoodLpBackend;
pub use highs::HighsBackend;
pub use independence::*;
pub use naive::*;
pub use odd_independence::*;

use std::{fmt, ops::Add, time::Duration};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{errors::SolverError, graph::*};

/// Backend used by the convenience entry points
pub type DefaultBackend = HighsBackend;

/// Graphs with more nodes are not solved exactly by default
pub const DEFAULT_MAX_NODES: NumNodes = 40;

/// Policy knobs of the exact solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tractability ceiling; larger graphs yield [`Alpha::TooLarge`] without solving
    pub max_nodes: NumNodes,
    /// Time limit handed to the ILP backend for every single model
    pub timeout: Option<Duration>,
    /// Re-validate every set extracted from an ILP solution
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            timeout: None,
            verify: true,
        }
    }
}

impl SolverConfig {
    pub fn with_max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Value of an independence-type graph invariant. `TooLarge` is the documented non-answer
/// for graphs above the tractability ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alpha {
    Exact(NumNodes),
    TooLarge,
}

impl Alpha {
    pub fn value(&self) -> Option<NumNodes> {
        match self {
            Alpha::Exact(x) => Some(*x),
            Alpha::TooLarge => None,
        }
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Alpha::TooLarge)
    }
}

/// Sums component results; `TooLarge` is absorbing
impl Add for Alpha {
    type Output = Alpha;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Alpha::Exact(a), Alpha::Exact(b)) => Alpha::Exact(a + b),
            _ => Alpha::TooLarge,
        }
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alpha::Exact(x) => write!(f, "{x}"),
            Alpha::TooLarge => write!(f, "too large"),
        }
    }
}

/// Solves every connected component of `graph` independently and translates the partial
/// solutions back to node ids of `graph`. Returns `None` as soon as a component is reported
/// as too large.
pub(crate) fn solve_by_components<G, F>(
    graph: &G,
    mut solve_component: F,
) -> Result<Option<Vec<Node>>, SolverError>
where
    G: FullfledgedGraph,
    F: FnMut(&G) -> Result<Option<Vec<Node>>, SolverError>,
{
    let components = graph.connected_components();
    debug!(
        "Split graph with n={} into {} components (largest: {})",
        graph.number_of_nodes(),
        components.len(),
        components.iter().map(|c| c.len()).max().unwrap_or(0)
    );

    let mut solution = Vec::new();
    for component in components {
        let (subgraph, mapping) = graph.vertex_induced(&component);
        let Some(partial) = solve_component(&subgraph)? else {
            return Ok(None);
        };
        solution.extend(partial.into_iter().map(|u| mapping.old_id(u)));
    }

    Ok(Some(solution))
}
