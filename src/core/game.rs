//! Core mode interface for the over/under game.

use std::fmt;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::config::GameConfig;
use crate::core::draw::{NumberSource, RandomDraws};
use crate::core::pacer::{NoPause, Pacer, Sleeper};
use crate::core::round::{resolve_call, resolve_turn, Call, Direction, Guess, Outcome};
use crate::core::terminal::Console;
use crate::games::computer::Opponent;

const GUESS_PROMPT: &str = "Enter \"h\" for higher, \"l\" for lower, or \"q\" to quit: ";

/// Everything a mode needs from the outside world, handed to it for one invocation
pub struct Context<'io> {
    pub console: Console<'io>,
    pub draws: Box<dyn NumberSource>,
    pub opponent: Box<dyn Opponent>,
    pacer: Box<dyn Pacer>,
    reveal_delay: Duration,
    thinking_delay: Duration,
}

impl<'io> Context<'io> {
    pub fn new(
        console: Console<'io>,
        draws: Box<dyn NumberSource>,
        opponent: Box<dyn Opponent>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        let defaults = GameConfig::default();
        Self {
            console,
            draws,
            opponent,
            pacer,
            reveal_delay: defaults.reveal_delay,
            thinking_delay: defaults.thinking_delay,
        }
    }

    /// Wire up draws, opponent and pauses the way `config` asks for
    pub fn from_config(config: &GameConfig, console: Console<'io>) -> Self {
        let draws: Box<dyn NumberSource> = match config.seed {
            Some(seed) => Box::new(RandomDraws::seeded(seed)),
            None => Box::new(RandomDraws::from_entropy()),
        };
        let pacer: Box<dyn Pacer> = if config.paced() {
            Box::new(Sleeper)
        } else {
            Box::new(NoPause)
        };
        Self {
            console,
            draws,
            opponent: config.opponent.build(config.seed),
            pacer,
            reveal_delay: config.reveal_delay,
            thinking_delay: config.thinking_delay,
        }
    }

    /// Suspense before a number is revealed
    pub fn reveal_pause(&mut self) {
        self.pacer.pause(self.reveal_delay);
    }

    /// The computer "thinking" about its call
    pub fn thinking_pause(&mut self) {
        self.pacer.pause(self.thinking_delay);
    }

    /// Draw the opening number of a mode, no exclusion
    pub fn first_draw(&mut self) -> u8 {
        self.draws.draw(None)
    }

    pub fn resolve(&mut self, current: u8, guess: Guess) -> Outcome {
        resolve_turn(self.draws.as_mut(), current, guess)
    }

    /// Resolve a bare higher/lower call, as the computer makes
    pub fn resolve_call(&mut self, current: u8, called: Direction) -> Call {
        resolve_call(self.draws.as_mut(), current, called)
    }

    /// Show `status`, the current number and the h/l/q prompt, then read a valid guess
    pub fn ask_guess(&mut self, status: &str, current: u8) -> Result<Guess> {
        let prompt = [
            String::new(),
            status.to_string(),
            format!("Current number: {}", current),
            GUESS_PROMPT.to_string(),
        ];
        let token = self.console.read_command(&prompt, &Guess::TOKENS)?;
        Guess::from_token(&token).ok_or_else(|| anyhow!("unexpected guess token `{}`", token))
    }
}

/// Who sits at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    PlayerOne,
    PlayerTwo,
    Player,
    Computer,
}

impl Seat {
    /// The seat across the table
    pub fn other(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
            Seat::Player => Seat::Computer,
            Seat::Computer => Seat::Player,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::PlayerOne => "Player One",
            Seat::PlayerTwo => "Player Two",
            Seat::Player => "The player",
            Seat::Computer => "The computer",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Quit,
    WrongGuess,
}

/// How a mode ended, as reported by the mode itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finish {
    pub ending: Ending,
    pub score: Option<u32>,
    pub winner: Option<Seat>,
}

/// What the engine hands back to the menu once a mode is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSummary {
    pub mode: &'static str,
    pub rounds: u32,
    pub ending: Ending,
    pub score: Option<u32>,
    pub winner: Option<Seat>,
}

/// Result of one loop iteration of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(Finish),
}

/// Main trait every mode implements
///
/// The engine owns the loop: it prints the intro, makes the free first draw, builds the
/// state with [`GameMode::new_game`] and calls [`GameMode::turn`] until it reports
/// [`Step::Finished`].
pub trait GameMode {
    /// Mode-local state, alive for a single invocation
    type State;

    const NAME: &'static str;
    const BANNER: &'static str;
    /// Rule lines printed after the shared ones
    const EXTRA_RULES: &'static [&'static str] = &[];

    fn new_game(first_number: u8) -> Self::State;

    fn turn(state: &mut Self::State, ctx: &mut Context<'_>) -> Result<Step>;
}
