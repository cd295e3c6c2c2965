//! Alias-method sampler for discrete weighted distributions.
//!
//! Construction is O(n); each draw is O(1): one uniform index plus one
//! biased coin flip.
//!
//! # Algorithm
//!
//! 1. Scale the weights so they average 1.
//! 2. Split indices into `small` (scaled weight < 1) and `large` (>= 1).
//! 3. Pair one `small` with one `large`: the small slot keeps its own
//!    probability and aliases the large one; the large one donates the
//!    shortfall and is re-bucketed.
//! 4. Leftover indices get probability 1 and alias themselves.

use crate::rng::WorkforceRng;
use crate::types::SamplerError;

/// One slot of the alias table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AliasEntry {
    /// Index returned when the coin flip fails
    pub alias: usize,
    /// Probability of returning the slot's own index
    pub probability: f64,
}

/// Weighted categorical sampler using Walker's alias method.
///
/// The table is built once in [`AliasSampler::new`] and never changes.
///
/// # Examples
///
/// ```
/// use workforce_core::rng::WorkforceRng;
/// use workforce_core::sampling::AliasSampler;
///
/// let sampler = AliasSampler::new(vec![("a", 1.0), ("b", 3.0)]).unwrap();
/// assert_eq!(sampler.len(), 2);
/// assert!((sampler.probability_of(1) - 0.75).abs() < 1e-12);
///
/// let mut rng = WorkforceRng::from_seed(1);
/// let outcome = sampler.draw(&mut rng);
/// assert!(*outcome == "a" || *outcome == "b");
///
/// assert!(AliasSampler::<&str>::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AliasSampler<T> {
    outcomes: Vec<T>,
    table: Vec<AliasEntry>,
    shares: Vec<f64>,
}

impl<T> AliasSampler<T> {
    /// Builds a sampler from `(outcome, weight)` pairs.
    ///
    /// # Errors
    /// - `SamplerError::Empty` if no pairs are supplied
    /// - `SamplerError::InvalidWeight` if any weight is not finite or is `<= 0`
    pub fn new<I>(pairs: I) -> Result<Self, SamplerError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (outcomes, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        if outcomes.is_empty() {
            return Err(SamplerError::Empty);
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(SamplerError::InvalidWeight { index, weight });
        }

        let total: f64 = weights.iter().sum();
        let shares = weights.iter().map(|w| w / total).collect();
        let table = build_table(&weights, total);

        Ok(Self {
            outcomes,
            table,
            shares,
        })
    }

    /// Draws one outcome.
    #[inline]
    pub fn draw(&self, rng: &mut WorkforceRng) -> &T {
        &self.outcomes[self.draw_index(rng)]
    }

    /// Draws one outcome index.
    #[inline]
    pub fn draw_index(&self, rng: &mut WorkforceRng) -> usize {
        let slot = rng.gen_index(self.table.len());
        let entry = self.table[slot];
        if rng.gen_uniform() < entry.probability {
            slot
        } else {
            entry.alias
        }
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes in input order.
    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    /// The alias table, parallel to [`AliasSampler::outcomes`].
    pub fn table(&self) -> &[AliasEntry] {
        &self.table
    }

    /// Normalised share of outcome `index` (its weight over the total).
    pub fn probability_of(&self, index: usize) -> f64 {
        self.shares[index]
    }
}

fn build_table(weights: &[f64], total: f64) -> Vec<AliasEntry> {
    let n = weights.len();
    let mut scaled: Vec<f64> = weights.iter().map(|w| w * n as f64 / total).collect();
    let mut table: Vec<AliasEntry> = (0..n)
        .map(|i| AliasEntry {
            alias: i,
            probability: 1.0,
        })
        .collect();

    let (mut small, mut large): (Vec<usize>, Vec<usize>) = (0..n).partition(|&i| scaled[i] < 1.0);

    while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
        small.pop();
        large.pop();
        table[s] = AliasEntry {
            alias: l,
            probability: scaled[s],
        };
        scaled[l] += scaled[s] - 1.0;
        if scaled[l] < 1.0 {
            small.push(l);
        } else {
            large.push(l);
        }
    }

    // Whatever remains is 1 up to rounding error and keeps the identity entry.
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn frequencies<T>(sampler: &AliasSampler<T>, seed: u64, draws: usize) -> Vec<f64> {
        let mut rng = WorkforceRng::from_seed(seed);
        let mut counts = vec![0usize; sampler.len()];
        for _ in 0..draws {
            counts[sampler.draw_index(&mut rng)] += 1;
        }
        counts.iter().map(|&c| c as f64 / draws as f64).collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = AliasSampler::<u8>::new(Vec::new()).unwrap_err();
        assert_eq!(err, SamplerError::Empty);
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let err = AliasSampler::new(vec![("a", 1.0), ("b", 0.0)]).unwrap_err();
        assert_eq!(err, SamplerError::InvalidWeight { index: 1, weight: 0.0 });

        let err = AliasSampler::new(vec![("a", -2.0)]).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidWeight { index: 0, .. }));

        assert!(AliasSampler::new(vec![("a", f64::NAN)]).is_err());
        assert!(AliasSampler::new(vec![("a", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_single_outcome_always_drawn() {
        let sampler = AliasSampler::new(vec![("only", 42.0)]).unwrap();
        let mut rng = WorkforceRng::from_seed(3);
        for _ in 0..100 {
            assert_eq!(*sampler.draw(&mut rng), "only");
        }
        assert_eq!(sampler.table()[0].probability, 1.0);
    }

    #[test]
    fn test_uniform_weights_give_identity_table() {
        let sampler = AliasSampler::new((0..5).map(|i| (i, 2.0))).unwrap();
        for (i, entry) in sampler.table().iter().enumerate() {
            assert_eq!(entry.alias, i);
            assert_relative_eq!(entry.probability, 1.0);
        }
    }

    #[test]
    fn test_leftover_large_keeps_identity_entry() {
        // scaled weights 0.5, 0.5, 2.0: both small slots alias the last one
        let sampler = AliasSampler::new(vec![("a", 1.0), ("b", 1.0), ("c", 4.0)]).unwrap();
        let table = sampler.table();
        assert_eq!(table[0], AliasEntry { alias: 2, probability: 0.5 });
        assert_eq!(table[1], AliasEntry { alias: 2, probability: 0.5 });
        assert_eq!(table[2], AliasEntry { alias: 2, probability: 1.0 });
    }

    #[test]
    fn test_empirical_frequencies_match_weights() {
        let weights = [5.0, 1.0, 10.0, 0.5, 3.5];
        let sampler = AliasSampler::new(weights.iter().enumerate().map(|(i, &w)| (i, w))).unwrap();
        let freqs = frequencies(&sampler, 2024, 100_000);
        let total: f64 = weights.iter().sum();
        for (i, w) in weights.iter().enumerate() {
            assert!(
                (freqs[i] - w / total).abs() < 0.02,
                "outcome {} frequency {} vs share {}",
                i,
                freqs[i],
                w / total
            );
        }
    }

    #[test]
    fn test_rebuilt_sampler_is_statistically_indistinguishable() {
        let pairs = vec![("x", 0.2), ("y", 0.3), ("z", 0.5)];
        let first = AliasSampler::new(pairs.clone()).unwrap();
        let second = AliasSampler::new(pairs).unwrap();
        let a = frequencies(&first, 10, 100_000);
        let b = frequencies(&second, 20, 100_000);
        for (fa, fb) in a.iter().zip(&b) {
            assert!((fa - fb).abs() < 0.02);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_table_is_well_formed(weights in prop::collection::vec(0.001f64..1000.0, 1..64)) {
            let n = weights.len();
            let sampler = AliasSampler::new(weights.iter().copied().enumerate()).unwrap();

            // Each slot's mass, plus mass aliased into it, reconstructs the share.
            let mut mass = vec![0.0; n];
            for (i, entry) in sampler.table().iter().enumerate() {
                prop_assert!(entry.alias < n);
                prop_assert!(entry.probability >= 0.0 && entry.probability <= 1.0 + 1e-9);
                mass[i] += entry.probability / n as f64;
                mass[entry.alias] += (1.0 - entry.probability) / n as f64;
            }
            for i in 0..n {
                prop_assert!((mass[i] - sampler.probability_of(i)).abs() < 1e-9);
            }
        }
    }
}
