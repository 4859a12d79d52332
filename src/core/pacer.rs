//! Suspense pauses. Purely presentational, so tests swap in [`NoPause`].

use std::{thread, time::Duration};

pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the thread for the requested time.
pub struct Sleeper;

impl Pacer for Sleeper {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}
