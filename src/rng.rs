//! Seeded random source
//!
//! Every randomised step (input generation, reshuffles) draws from one
//! explicitly owned generator so a run can be replayed from its seed.

use rand::distributions::uniform::SampleUniform;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{SystemTime, UNIX_EPOCH};

/// Inclusive-range integer generator.
///
/// Defaults to `Xoshiro256PlusPlus`; any `RngCore` can be plugged in with
/// [`RandomSource::from_rng`].
#[derive(Clone, Debug)]
pub struct RandomSource<R = Xoshiro256PlusPlus> {
    rng: R,
    seed: Option<u64>,
}

impl RandomSource {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed once from the wall clock
    pub fn from_clock() -> Self {
        Self::seed_from_u64(clock_seed())
    }
}

impl<R: RngCore> RandomSource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng, seed: None }
    }

    /// The seed this source was created from, if it was seeded from a `u64`
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform value in `[min(low, high), max(low, high)]`.
    ///
    /// Bounds may be passed in either order; both endpoints are reachable.
    pub fn rand_int<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        if low <= high {
            self.rng.gen_range(low..=high)
        } else {
            self.rng.gen_range(high..=low)
        }
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// `size` values drawn from `[0, size - 1]`, so duplicates are common.
pub fn random_sequence<R: RngCore>(size: usize, rng: &mut RandomSource<R>) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }
    let high = i32::try_from(size - 1).unwrap_or(i32::MAX);
    (0..size).map(|_| rng.rand_int(0, high)).collect()
}
