use anyhow::Result;
use tracing::debug;

use crate::core::game::{Context, Ending, Finish, GameMode, Seat, Step};
use crate::core::renderer;
use crate::core::round::{Call, Outcome};
use crate::core::terminal::TerminalColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerState {
    pub current: u8,
}

/// Human calls first; every correct human call is answered by a computer call
pub struct ComputerMode;

impl ComputerMode {
    fn computer_turn(state: &mut ComputerState, ctx: &mut Context<'_>) -> Result<Step> {
        ctx.console.empty_line()?;
        ctx.console.print_line("It's the computer's turn!")?;
        ctx.console
            .print_line(&format!("The current number is: {}.", state.current))?;

        let call = ctx.opponent.call(state.current);
        debug!(current = state.current, %call, "computer called");
        ctx.console.flush()?;
        ctx.thinking_pause();
        ctx.console.empty_line()?;
        ctx.console
            .print_colored_line(&format!("[Computer]: \"I think it will be {}\".", call), TerminalColor::Magenta)?;

        match ctx.resolve_call(state.current, call) {
            Call::Correct { next } => {
                renderer::reveal(ctx, next)?;
                state.current = next;
                ctx.console.print_line("Good job, computer! It's the player's turn!")?;
                Ok(Step::Continue)
            }
            Call::Incorrect { next } => {
                renderer::reveal(ctx, next)?;
                ctx.console
                    .print_colored_line("The computer was wrong. The player wins!!!", TerminalColor::Green)?;
                Ok(Step::Finished(Finish {
                    ending: Ending::WrongGuess,
                    score: None,
                    winner: Some(Seat::Player),
                }))
            }
        }
    }
}

impl GameMode for ComputerMode {
    type State = ComputerState;

    const NAME: &'static str = "computer";
    const BANNER: &'static str = "Against the Computer Mode";
    const EXTRA_RULES: &'static [&'static str] = &["You go first, the computer goes second."];

    fn new_game(first_number: u8) -> Self::State {
        ComputerState {
            current: first_number,
        }
    }

    fn turn(state: &mut Self::State, ctx: &mut Context<'_>) -> Result<Step> {
        let guess = ctx.ask_guess("It's your turn!", state.current)?;
        let previous = state.current;

        match ctx.resolve(previous, guess) {
            Outcome::QuitRequested => {
                ctx.console.print_line("Returning to main menu.")?;
                Ok(Step::Finished(Finish {
                    ending: Ending::Quit,
                    score: None,
                    winner: None,
                }))
            }
            Outcome::Incorrect { next } => {
                renderer::reveal(ctx, next)?;
                renderer::lament(&mut ctx.console, previous, next)?;
                ctx.console
                    .print_colored_line("Game over. The computer wins!", TerminalColor::Red)?;
                Ok(Step::Finished(Finish {
                    ending: Ending::WrongGuess,
                    score: None,
                    winner: Some(Seat::Computer),
                }))
            }
            Outcome::Correct { next } => {
                renderer::reveal(ctx, next)?;
                renderer::praise(&mut ctx.console, None, previous, next)?;
                state.current = next;
                Self::computer_turn(state, ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draw::RandomDraws;
    use crate::core::engine::run_mode;
    use crate::core::game::ModeSummary;
    use crate::core::pacer::NoPause;
    use crate::core::round::Direction;
    use crate::core::terminal::Console;
    use crate::core::testing::{self, RecordingPacer, ScriptedOpponent};
    use crate::games::computer::CoinFlip;
    use std::io::Cursor;
    use std::time::Duration;

    fn play(input: &str, draws: Vec<u8>, calls: Vec<Direction>) -> (ModeSummary, String) {
        let mut out = Vec::new();
        let summary = {
            let mut ctx = testing::context(input, &mut out, draws, calls);
            run_mode::<ComputerMode>(&mut ctx).unwrap()
        };
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn human_loss_skips_the_computer_turn() {
        // no computer call scripted: asking for one would panic
        let (summary, text) = play("h\n", vec![9, 4], vec![]);
        assert_eq!(summary.winner, Some(Seat::Computer));
        assert!(text.contains("Game over. The computer wins!"));
        assert!(!text.contains("computer's turn"));
    }

    #[test]
    fn computer_answers_a_correct_call() {
        let (summary, text) = play("h\nq\n", vec![4, 9, 2], vec![Direction::Lower]);
        assert_eq!(summary.ending, Ending::Quit);
        assert_eq!(summary.winner, None);
        assert!(text.contains("It's the computer's turn!\nThe current number is: 9."));
        assert!(text.contains("[Computer]: \"I think it will be lower\"."));
        assert!(text.contains("The next number is: 2\nGood job, computer! It's the player's turn!"));
        assert!(text.contains("Current number: 2"));
        assert!(text.contains("Returning to main menu."));
    }

    #[test]
    fn wrong_computer_call_hands_the_player_the_win() {
        let (summary, text) = play("l\n", vec![8, 3, 1], vec![Direction::Higher]);
        assert_eq!(summary.winner, Some(Seat::Player));
        assert_eq!(summary.rounds, 1);
        assert!(text.contains("The computer was wrong. The player wins!!!"));
    }

    #[test]
    fn pauses_are_one_second_reveals_and_two_second_thinking() {
        let pacer = RecordingPacer::default();
        let pauses = pacer.pauses.clone();
        let mut out = Vec::new();
        {
            let mut ctx = Context::new(
                Console::new(Cursor::new("h\nq\n"), &mut out, false),
                Box::new(testing::ScriptedDraws::new([4, 9, 2])),
                Box::new(ScriptedOpponent::new([Direction::Lower])),
                Box::new(pacer),
            );
            run_mode::<ComputerMode>(&mut ctx).unwrap();
        }
        assert_eq!(
            *pauses.borrow(),
            vec![Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(1)]
        );
    }

    #[test]
    fn seeded_games_always_end() {
        for seed in 0..50 {
            let mut out = Vec::new();
            let mut ctx = Context::new(
                Console::new(Cursor::new("h\n".repeat(200)), &mut out, false),
                Box::new(RandomDraws::seeded(seed)),
                Box::new(CoinFlip::seeded(seed + 1)),
                Box::new(NoPause),
            );
            let summary = run_mode::<ComputerMode>(&mut ctx).unwrap();
            assert_eq!(summary.ending, Ending::WrongGuess);
            assert!(summary.winner.is_some());
        }
    }
}
