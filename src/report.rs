use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    errors::SolverError,
    exact::*,
    graph::*,
};

/// The three invariants of a graph and how they relate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub nodes: NumNodes,
    pub edges: NumEdges,
    pub digest: String,
    pub alpha: Alpha,
    pub alpha_od: Alpha,
    pub alpha_square: Alpha,
    /// `alpha == alpha_od`, unknown if either is too large
    pub alpha_equals_alpha_od: Option<bool>,
    /// `alpha_od == alpha_square`, unknown if either is too large
    pub alpha_od_equals_alpha_square: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub witness: Option<Vec<Node>>,
}

fn equal(a: Alpha, b: Alpha) -> Option<bool> {
    Some(a.value()? == b.value()?)
}

impl GraphReport {
    pub fn compute<B: IlpBackend, G: FullfledgedGraph>(
        graph: &G,
        config: &SolverConfig,
    ) -> Result<Self, SolverError> {
        let alpha = independence_number_with::<B, G>(graph, config)?;
        let odd = solve_odd_independent_set::<B, G>(graph, config)?;
        let alpha_od = odd.alpha();
        let alpha_square = independence_number_with::<B, G>(&graph.square(), config)?;

        let report = Self {
            name: None,
            nodes: graph.number_of_nodes(),
            edges: graph.number_of_edges(),
            digest: graph.digest_hex(),
            alpha,
            alpha_od,
            alpha_square,
            alpha_equals_alpha_od: equal(alpha, alpha_od),
            alpha_od_equals_alpha_square: equal(alpha_od, alpha_square),
            witness: odd.set().map(|s| s.sorted()),
        };

        info!(
            "n={} m={} alpha={} alpha_od={} alpha(G^2)={}",
            report.nodes, report.edges, report.alpha, report.alpha_od, report.alpha_square
        );

        Ok(report)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn without_witness(mut self) -> Self {
        self.witness = None;
        self
    }

    /// Returns false if a known value breaks `alpha >= alpha_od >= alpha_square`
    pub fn satisfies_inequality_chain(&self) -> bool {
        let le = |a: Alpha, b: Alpha| match (a.value(), b.value()) {
            (Some(a), Some(b)) => a <= b,
            _ => true,
        };
        le(self.alpha_od, self.alpha) && le(self.alpha_square, self.alpha_od)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn report(graph: &AdjArray) -> GraphReport {
        GraphReport::compute::<DefaultBackend, _>(graph, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn cycle_of_four() {
        let r = report(&AdjArray::cycle(4));
        assert_eq!((r.nodes, r.edges), (4, 4));
        assert_eq!(r.alpha, Alpha::Exact(2));
        assert_eq!(r.alpha_od, Alpha::Exact(1));
        assert_eq!(r.alpha_square, Alpha::Exact(1));
        assert_eq!(r.alpha_equals_alpha_od, Some(false));
        assert_eq!(r.alpha_od_equals_alpha_square, Some(true));
        assert_eq!(r.witness.as_ref().map(|w| w.len()), Some(1));
        assert!(r.satisfies_inequality_chain());
    }

    #[test]
    fn too_large_yields_unknown_flags() {
        let r = report(&AdjArray::path(60));
        assert_eq!(r.alpha, Alpha::TooLarge);
        assert_eq!(r.alpha_od, Alpha::TooLarge);
        assert_eq!(r.alpha_equals_alpha_od, None);
        assert_eq!(r.alpha_od_equals_alpha_square, None);
        assert_eq!(r.witness, None);
        assert!(r.satisfies_inequality_chain());
    }

    #[test]
    fn json() {
        let r = report(&AdjArray::complete(3))
            .with_name("triangle")
            .without_witness();
        let json = serde_json::to_string(&r).unwrap();

        assert!(json.starts_with(r#"{"name":"triangle","nodes":3,"edges":3,"#));
        assert!(json.contains(r#""alpha_od":{"exact":1}"#));
        assert!(json.contains(r#""alpha_equals_alpha_od":true"#));
        assert!(!json.contains("witness"));

        let back: GraphReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
