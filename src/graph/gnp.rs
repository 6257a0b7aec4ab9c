use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert graph `G(n,p)`: each of the `n(n-1)/2` possible edges exists
    /// independently with probability `p`.
    ///
    /// ** Panics if `p` is not within `[0, 1]` **
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self;
}

impl<G> GnpGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        let mut graph = Self::new(n);
        let number_of_pairs = n as u64 * n.saturating_sub(1) as u64 / 2;

        // pairs are indexed row by row: (0,1), (0,2), ..., (0,n-1), (1,2), ...
        let mut u: Node = 0;
        let mut row_begin = 0u64;
        for index in BernoulliSamplingRange::new(rng, number_of_pairs, p) {
            while index >= row_begin + (n - 1 - u) as u64 {
                row_begin += (n - 1 - u) as u64;
                u += 1;
            }

            graph.add_edge(u, u + 1 + (index - row_begin) as Node);
        }

        graph
    }
}

/// Yields an increasing subsequence of `0..end` that contains each element independently
/// with probability `prob`. Gaps are drawn from a geometric distribution, so the running
/// time is proportional to the number of elements produced.
pub struct BernoulliSamplingRange<'a, R: Rng> {
    next: u64,
    end: u64,
    distr: Geometric,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    /// ** Panics if `prob` is not within `[0, 1]` **
    pub fn new(rng: &'a mut R, end: u64, prob: f64) -> Self {
        Self {
            next: 0,
            end,
            distr: Geometric::new(prob).expect("probability must be within [0, 1]"),
            rng,
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let skip = self.rng.sample(self.distr);
        match self.next.checked_add(skip) {
            Some(x) if x < self.end => {
                self.next = x + 1;
                Some(x)
            }
            _ => {
                self.next = self.end;
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bernoulli_range_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        assert_eq!(BernoulliSamplingRange::new(rng, 0, 1.0).count(), 0);
        assert_eq!(
            BernoulliSamplingRange::new(rng, 10, 1.0).collect_vec(),
            (0..10).collect_vec()
        );
        assert_eq!(BernoulliSamplingRange::new(rng, 100, 0.0).count(), 0);

        let sample = BernoulliSamplingRange::new(rng, 1000, 0.3).collect_vec();
        assert!(sample.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(sample.iter().all(|&x| x < 1000));
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in 0..12 {
            let complete = AdjArray::random_gnp(rng, n, 1.0);
            assert_eq!(complete.digest(), AdjArray::complete(n).digest());

            let empty = AdjArray::random_gnp(rng, n, 0.0);
            assert_eq!(empty.number_of_edges(), 0);
            assert_eq!(empty.number_of_nodes(), n);
        }
    }

    #[test]
    fn gnp_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234);

        for p in [0.05, 0.2, 0.5] {
            let repeats = 100;
            let n = 30;

            let mean_edges = (0..repeats)
                .map(|_| AdjArray::random_gnp(rng, n, p).number_of_edges() as f64)
                .sum::<f64>()
                / repeats as f64;

            let expected = p * (n as f64) * ((n - 1) as f64) / 2.0;

            assert!((0.75 * expected..1.25 * expected).contains(&mean_edges));
        }
    }
}
