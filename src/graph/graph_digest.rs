use super::*;
use fxhash::FxHasher64;
use std::hash::Hasher;

pub type GraphDigestValue = u64;

pub trait GraphDigest {
    /// Computes a hash of the labelled graph that is independent of the order in which
    /// edges were inserted. Isomorphic graphs with different labels get different digests.
    fn digest(&self) -> GraphDigestValue;

    /// Returns the digest as a 16 character hex string
    fn digest_hex(&self) -> String {
        format!("{:016x}", self.digest())
    }
}

impl<G: AdjacencyList> GraphDigest for G {
    fn digest(&self) -> GraphDigestValue {
        let mut hasher = FxHasher64::default();

        // first encode the number of nodes in the graph
        hasher.write_u32(self.number_of_nodes());

        // then append a sorted edge list
        for Edge(u, v) in self.ordered_edges() {
            hasher.write_u32(u);
            hasher.write_u32(v);
        }

        hasher.finish()
    }
}
