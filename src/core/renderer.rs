//! Narration shared by every mode.

use crate::core::game::Context;
use crate::core::round::Direction;
use crate::core::terminal::{Console, ConsoleError, TerminalColor};

const RULES: [&str; 3] = [
    "The numbers go from 1 to 13.",
    "Guess if the second number will be higher or lower!",
    "The next number will never be the same number.",
];

/// Banner plus the rule lines
pub fn announce_mode(console: &mut Console<'_>, banner: &str, extra_rules: &[&str]) -> Result<(), ConsoleError> {
    console.empty_line()?;
    console.print_colored_line(&format!("*** {} ***", banner), TerminalColor::Cyan)?;
    console.empty_line()?;
    for line in RULES.iter().chain(extra_rules) {
        console.print_line(line)?;
    }
    Ok(())
}

/// Pause for suspense, then show the drawn number
pub fn reveal(ctx: &mut Context<'_>, next: u8) -> Result<(), ConsoleError> {
    ctx.console.flush()?;
    ctx.reveal_pause();
    ctx.console.print_line(&format!("The next number is: {}", next))
}

/// "Good job! 9 is higher than 7." with an optional name after the praise
pub fn praise(console: &mut Console<'_>, who: Option<&str>, previous: u8, next: u8) -> Result<(), ConsoleError> {
    let opener = match who {
        Some(name) => format!("Good job {}!", name),
        None => "Good job!".to_string(),
    };
    console.print_colored_line(
        &format!("{} {} is {} than {}.", opener, next, Direction::between(previous, next), previous),
        TerminalColor::Green,
    )
}

/// "Oh no! 9 is higher than 7!"
pub fn lament(console: &mut Console<'_>, previous: u8, next: u8) -> Result<(), ConsoleError> {
    console.print_colored_line(
        &format!("Oh no! {} is {} than {}!", next, Direction::between(previous, next), previous),
        TerminalColor::Red,
    )
}
