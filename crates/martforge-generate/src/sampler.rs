use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Normal, Poisson};

/// Owned, seeded randomness context threaded into every generator.
///
/// Constructed exactly once per run; every draw advances a single ChaCha8
/// stream, so a fixed seed reproduces every table byte-for-byte. There is no
/// reseeding mid-run.
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `lo..=hi`.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform float in `lo..hi`.
    pub fn float_between(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..hi)
    }

    /// Bernoulli draw with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.rng.random_range(0..items.len());
        &items[index]
    }

    /// Weighted categorical choice; weights need not be normalized.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let index = WeightedIndex::new(weights).expect("valid weight vector");
        index.sample(&mut self.rng)
    }

    /// Draw from a prebuilt weighted index (hot-loop variant).
    pub fn weighted(&mut self, index: &WeightedIndex<f64>) -> usize {
        index.sample(&mut self.rng)
    }

    /// Normal draw clamped to `[lo, hi]`.
    pub fn normal_clamped(&mut self, mean: f64, sd: f64, lo: f64, hi: f64) -> f64 {
        let dist = Normal::new(mean, sd).expect("valid normal parameters");
        dist.sample(&mut self.rng).clamp(lo, hi)
    }

    /// Exponential draw with the given mean.
    pub fn exponential(&mut self, mean: f64) -> f64 {
        let dist = Exp::new(1.0 / mean).expect("valid exponential rate");
        dist.sample(&mut self.rng)
    }

    /// Poisson draw with the given mean.
    pub fn poisson(&mut self, mean: f64) -> u64 {
        let dist = Poisson::new(mean).expect("valid poisson mean");
        dist.sample(&mut self.rng) as u64
    }

    /// `amount` distinct indices drawn uniformly from `0..len`,
    /// without replacement.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount).into_vec()
    }
}
