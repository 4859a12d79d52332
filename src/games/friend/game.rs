use anyhow::Result;
use tracing::debug;

use crate::core::game::{Context, Ending, Finish, GameMode, Seat, Step};
use crate::core::renderer;
use crate::core::round::Outcome;
use crate::core::terminal::TerminalColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendState {
    pub current: u8,
    pub turn_owner: Seat,
}

impl FriendState {
    /// Hand the turn to the other player
    pub fn swap(&mut self) {
        self.turn_owner = self.turn_owner.other();
    }
}

/// Two people at one keyboard taking turns; first wrong call or quit loses
pub struct FriendMode;

impl GameMode for FriendMode {
    type State = FriendState;

    const NAME: &'static str = "friend";
    const BANNER: &'static str = "Against a Friend Mode";

    fn new_game(first_number: u8) -> Self::State {
        FriendState {
            current: first_number,
            turn_owner: Seat::PlayerOne,
        }
    }

    fn turn(state: &mut Self::State, ctx: &mut Context<'_>) -> Result<Step> {
        let player = state.turn_owner;
        let guess = ctx.ask_guess(&format!("It's your turn, {}!", player), state.current)?;
        let previous = state.current;

        match ctx.resolve(previous, guess) {
            Outcome::QuitRequested => {
                ctx.console.print_line(&format!(
                    "{} quit the game. {} wins!",
                    player,
                    player.other()
                ))?;
                Ok(Step::Finished(Finish {
                    ending: Ending::Quit,
                    score: None,
                    winner: Some(player.other()),
                }))
            }
            Outcome::Correct { next } => {
                renderer::reveal(ctx, next)?;
                renderer::praise(&mut ctx.console, Some(player.name()), previous, next)?;
                state.current = next;
                state.swap();
                debug!(next_player = %state.turn_owner, "turn passed");
                Ok(Step::Continue)
            }
            Outcome::Incorrect { next } => {
                renderer::reveal(ctx, next)?;
                renderer::lament(&mut ctx.console, previous, next)?;
                ctx.console
                    .print_colored_line(&format!("Game over. {} wins!", player.other()), TerminalColor::Magenta)?;
                Ok(Step::Finished(Finish {
                    ending: Ending::WrongGuess,
                    score: None,
                    winner: Some(player.other()),
                }))
            }
        }
    }
}
