//! Wheel spin randomness
//!
//! The engine models the wheel statically; actual spin outcomes come from
//! here. Each spin is a uniform draw over the segments.

use crate::core::{Segment, WheelConfiguration};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random outcome source for wheel spins and solve draws
pub struct WheelRng<R: Rng> {
    rng: R,
}

impl WheelRng<StdRng> {
    /// Seeded RNG for reproducible games
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> WheelRng<R> {
    /// Wrap an existing RNG
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Spin the wheel, landing on a uniformly random segment
    ///
    /// # Panics
    /// Panics if the wheel has no segments; callers hold a validated
    /// configuration.
    pub fn spin(&mut self, wheel: &WheelConfiguration) -> Segment {
        let index = self.rng.random_range(0..wheel.len());
        wheel.segments()[index]
    }

    /// Draw a uniform value in `[0, 1)`, e.g. for simulated solve attempts
    pub fn chance(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Pick a uniformly random index below `len`
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
