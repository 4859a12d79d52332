//! Round engine: one guess, one draw, one comparison.

use std::fmt;

use tracing::debug;

use crate::core::draw::NumberSource;

/// Which side of the current number a call is on. Computer calls are always one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// Relation of `next` to `previous`. The two never match after a draw.
    pub fn between(previous: u8, next: u8) -> Self {
        if next > previous {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Direction::Higher => "higher",
            Direction::Lower => "lower",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Higher,
    Lower,
    Quit,
}

impl Guess {
    /// Tokens accepted at every in-game prompt.
    pub const TOKENS: [&'static str; 3] = ["h", "l", "q"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "h" => Some(Guess::Higher),
            "l" => Some(Guess::Lower),
            "q" => Some(Guess::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct { next: u8 },
    Incorrect { next: u8 },
    QuitRequested,
}

/// A higher/lower call checked against a fresh draw. There is no quit here, so computer
/// calls resolve to one of these two cases only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Correct { next: u8 },
    Incorrect { next: u8 },
}

/// Draw past `current` and check `called` against it.
pub fn resolve_call(draws: &mut dyn NumberSource, current: u8, called: Direction) -> Call {
    let next = draws.draw(Some(current));
    let call = if Direction::between(current, next) == called {
        Call::Correct { next }
    } else {
        Call::Incorrect { next }
    };
    debug!(current, next, %called, ?call, "call resolved");
    call
}

/// Resolve a guess against `current`. A quit returns without drawing.
pub fn resolve_turn(draws: &mut dyn NumberSource, current: u8, guess: Guess) -> Outcome {
    let called = match guess {
        Guess::Quit => return Outcome::QuitRequested,
        Guess::Higher => Direction::Higher,
        Guess::Lower => Direction::Lower,
    };

    match resolve_call(draws, current, called) {
        Call::Correct { next } => Outcome::Correct { next },
        Call::Incorrect { next } => Outcome::Incorrect { next },
    }
}
