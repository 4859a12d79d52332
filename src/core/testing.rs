//! In-memory doubles for driving modes in unit tests.

use std::{collections::VecDeque, io::Cursor, time::Duration};

use crate::core::draw::NumberSource;
use crate::core::game::Context;
use crate::core::pacer::Pacer;
use crate::core::round::Direction;
use crate::core::terminal::Console;
use crate::games::computer::Opponent;

/// Replays a fixed list of samples. Panics when it runs dry.
pub struct ScriptedDraws {
    samples: VecDeque<u8>,
}

impl ScriptedDraws {
    pub fn new(samples: impl IntoIterator<Item = u8>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl NumberSource for ScriptedDraws {
    fn sample(&mut self) -> u8 {
        self.samples.pop_front().expect("scripted draws exhausted")
    }
}

/// Replays a fixed list of calls, ignoring the number on the table.
pub struct ScriptedOpponent {
    calls: VecDeque<Direction>,
}

impl ScriptedOpponent {
    pub fn new(calls: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            calls: calls.into_iter().collect(),
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn call(&mut self, _current: u8) -> Direction {
        self.calls.pop_front().expect("scripted calls exhausted")
    }
}

/// Remembers every pause instead of sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pub pauses: std::rc::Rc<std::cell::RefCell<Vec<Duration>>>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}

/// Build a context over `input` that writes into `output`.
pub fn context<'io>(
    input: &'io str,
    output: &'io mut Vec<u8>,
    draws: impl IntoIterator<Item = u8>,
    calls: impl IntoIterator<Item = Direction>,
) -> Context<'io> {
    Context::new(
        Console::new(Cursor::new(input), output, false),
        Box::new(ScriptedDraws::new(draws)),
        Box::new(ScriptedOpponent::new(calls)),
        Box::new(crate::core::pacer::NoPause),
    )
}
