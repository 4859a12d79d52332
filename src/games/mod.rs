pub mod computer;
pub mod friend;
pub mod macros;
pub mod solo;

use anyhow::Result;

use crate::core::game::{Context, ModeSummary};
use crate::register_modes;

/// Metadata about a mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeInfo {
    pub id: &'static str,
    pub key: &'static str,
    pub description: &'static str,
}

/// Mode launcher - runs one full invocation of the mode
pub type ModeLauncher = fn(&mut Context<'_>) -> Result<ModeSummary>;

/// Registry entry containing metadata and launcher
#[derive(Clone)]
pub struct ModeEntry {
    pub info: ModeInfo,
    pub launcher: ModeLauncher,
}

// Register all modes here, in menu order
register_modes! {
    solo => {
        mode: SoloMode,
        key: "1",
        description: "Play by yourself and get a high score"
    },
    friend => {
        mode: FriendMode,
        key: "2",
        description: "Play a two player game with a friend"
    },
    computer => {
        mode: ComputerMode,
        key: "3",
        description: "Play against the computer"
    }
}
