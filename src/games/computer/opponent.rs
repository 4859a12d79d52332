//! Computer call strategies.
//!
//! The computer never quits, so strategies return a [`Direction`] rather than a guess.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::draw::{HIGHEST, LOWEST};
use crate::core::round::Direction;

pub trait Opponent {
    fn call(&mut self, current: u8) -> Direction;
}

/// Fair coin, blind to the number on the table. Calling "higher" on 13 loses every time.
pub struct CoinFlip<R = StdRng> {
    rng: R,
}

impl CoinFlip<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CoinFlip<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for CoinFlip<R> {
    fn call(&mut self, _current: u8) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }
}

/// Calls whichever side has more values left, higher on a tie.
pub struct Odds;

impl Opponent for Odds {
    fn call(&mut self, current: u8) -> Direction {
        let above = HIGHEST.saturating_sub(current);
        let below = current.saturating_sub(LOWEST);
        if above >= below {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }
}
