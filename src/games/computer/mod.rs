//! Against the computer: the human calls, then a scripted opponent calls

pub mod game;
pub mod opponent;

pub use game::{ComputerMode, ComputerState};
pub use opponent::{CoinFlip, Odds, Opponent};
