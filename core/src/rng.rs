use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Single source of randomness for every draw the loader makes.
pub trait Sampler {
    /// Returns an index in `0..bound`. Callers never pass a zero bound.
    fn index_below(&mut self, bound: usize) -> usize;

    /// Picks `amount` distinct indices out of `0..len`, in draw order.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut indices: Vec<usize> = (0..len).collect();

        // partial Fisher-Yates, only the first `amount` slots are settled
        for i in 0..amount {
            let remaining = len - i;
            let j = i + self.index_below(remaining).min(remaining - 1);
            indices.swap(i, j);
        }

        indices.truncate(amount);
        indices
    }
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn index_below(&mut self, bound: usize) -> usize {
        (**self).index_below(bound)
    }
}

#[derive(Clone, Debug)]
pub struct SeededSampler {
    rng: SmallRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn index_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    struct AlwaysFirst;

    impl Sampler for AlwaysFirst {
        fn index_below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn sample_indices_draws_distinct_values() {
        let mut sampler = SeededSampler::new(7);

        let picked = sampler.sample_indices(100, 6);

        assert_eq!(picked.len(), 6);
        assert_eq!(picked.iter().collect::<BTreeSet<_>>().len(), 6);
        assert!(picked.iter().all(|&i| i < 100));
    }

    #[test]
    fn sample_indices_never_exceeds_population() {
        let mut sampler = SeededSampler::new(1);

        assert_eq!(sampler.sample_indices(3, 10).len(), 3);
        assert!(sampler.sample_indices(0, 4).is_empty());
    }

    #[test]
    fn deterministic_sampler_keeps_prefix_order() {
        assert_eq!(AlwaysFirst.sample_indices(5, 3), [0, 1, 2]);
    }

    #[test]
    fn same_seed_same_draws() {
        let a = SeededSampler::new(42).sample_indices(50, 10);
        let b = SeededSampler::new(42).sample_indices(50, 10);

        assert_eq!(a, b);
    }
}
