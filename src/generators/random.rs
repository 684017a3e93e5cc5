// src/generators/random.rs
use rand::rngs::OsRng;
use rand::Rng;
use rand_core::RngCore;

/// Source of uniform randomness consumed by the password generator.
///
/// Implementors only have to provide [`next_unit`](RandomSource::next_unit);
/// the default [`next_index`](RandomSource::next_index) scales it onto the
/// requested range. Sources backed by a real RNG should override
/// `next_index` with an unbiased range sampler.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let scaled = (self.next_unit() * bound as f64).floor() as usize;
        scaled.min(bound.saturating_sub(1))
    }
}

/// Adapter turning any `rand` generator into a [`RandomSource`].
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<OsRng> {
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl Default for RngSource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
