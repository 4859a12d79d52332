//! One player mode: chase a high score

pub mod game;

pub use game::{SoloMode, SoloState};
