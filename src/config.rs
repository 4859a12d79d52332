//! Session configuration.
//!
//! Everything here comes from command-line flags; there are no config files and no
//! settings survive the process.

use std::time::Duration;

use clap::ValueEnum;

use crate::cli::Cli;
use crate::games::computer::{CoinFlip, Odds, Opponent};

/// Pause before every reveal.
pub const REVEAL_DELAY: Duration = Duration::from_secs(1);
/// Computer "thinking" before it calls.
pub const THINKING_DELAY: Duration = Duration::from_secs(2);

/// How the computer picks higher or lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentStrategy {
    /// Fair coin, ignores the number on the table
    CoinFlip,
    /// Calls the side with more values left
    Odds,
}

impl OpponentStrategy {
    /// The opponent's coin gets its own stream so it does not shift the number draws.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Opponent> {
        match self {
            OpponentStrategy::CoinFlip => match seed {
                Some(seed) => Box::new(CoinFlip::seeded(seed.wrapping_add(1))),
                None => Box::new(CoinFlip::from_entropy()),
            },
            OpponentStrategy::Odds => Box::new(Odds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for draws and coin flips, `None` for OS entropy
    pub seed: Option<u64>,
    pub reveal_delay: Duration,
    pub thinking_delay: Duration,
    pub color: bool,
    pub opponent: OpponentStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay: REVEAL_DELAY,
            thinking_delay: THINKING_DELAY,
            color: true,
            opponent: OpponentStrategy::CoinFlip,
        }
    }
}

impl GameConfig {
    /// False when every pause is zero, as with `--fast`
    pub fn paced(&self) -> bool {
        !(self.reveal_delay.is_zero() && self.thinking_delay.is_zero())
    }
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        let defaults = GameConfig::default();
        let (reveal_delay, thinking_delay) = if cli.fast {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (defaults.reveal_delay, defaults.thinking_delay)
        };
        Self {
            seed: cli.seed,
            reveal_delay,
            thinking_delay,
            color: !cli.no_color,
            opponent: cli.opponent,
        }
    }
}
