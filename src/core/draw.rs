//! Random draw source.
//!
//! Every number the game shows comes from a [`NumberSource`]. A draw may exclude the
//! number it replaces; excluded samples are thrown away and drawn again, so the result
//! is uniform over the twelve remaining values.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

/// Smallest number a draw can produce.
pub const LOWEST: u8 = 1;
/// Largest number a draw can produce.
pub const HIGHEST: u8 = 13;

pub trait NumberSource {
    /// One uniform sample from `LOWEST..=HIGHEST`, no constraints.
    fn sample(&mut self) -> u8;

    /// Draw a number that differs from `excluding`. `None` means any value is fine.
    fn draw(&mut self, excluding: Option<u8>) -> u8 {
        loop {
            let value = self.sample();
            if Some(value) != excluding {
                return value;
            }
            trace!(value, "rejected repeated draw");
        }
    }
}

pub struct RandomDraws<R = StdRng> {
    rng: R,
}

impl RandomDraws<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDraws<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberSource for RandomDraws<R> {
    fn sample(&mut self) -> u8 {
        self.rng.random_range(LOWEST..=HIGHEST)
    }
}
