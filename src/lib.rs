pub mod core {
	pub mod draw;
	pub mod engine;
	pub mod game;
	pub mod menu;
	pub mod pacer;
	pub mod renderer;
	pub mod round;
	pub mod terminal;

	#[cfg(test)]
	pub(crate) mod testing;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Context, GameMode, ModeSummary};
