use anyhow::Result;

use crate::core::game::{Context, Ending, Finish, GameMode, Step};
use crate::core::renderer;
use crate::core::round::Outcome;
use crate::core::terminal::TerminalColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoloState {
    pub current: u8,
    pub score: u32,
}

/// One player against the sequence, one point per correct call
pub struct SoloMode;

impl GameMode for SoloMode {
    type State = SoloState;

    const NAME: &'static str = "solo";
    const BANNER: &'static str = "One Player Mode";

    fn new_game(first_number: u8) -> Self::State {
        SoloState {
            current: first_number,
            score: 0,
        }
    }

    fn turn(state: &mut Self::State, ctx: &mut Context<'_>) -> Result<Step> {
        let guess = ctx.ask_guess(&format!("Current score: {}", state.score), state.current)?;
        let previous = state.current;

        let finish = match ctx.resolve(previous, guess) {
            Outcome::QuitRequested => {
                ctx.console
                    .print_line(&format!("Final score: {}. Returning to main menu.", state.score))?;
                Finish {
                    ending: Ending::Quit,
                    score: Some(state.score),
                    winner: None,
                }
            }
            Outcome::Correct { next } => {
                renderer::reveal(ctx, next)?;
                state.score += 1;
                state.current = next;
                renderer::praise(&mut ctx.console, None, previous, next)?;
                return Ok(Step::Continue);
            }
            Outcome::Incorrect { next } => {
                renderer::reveal(ctx, next)?;
                renderer::lament(&mut ctx.console, previous, next)?;
                ctx.console.print_colored_line(
                    &format!("Game over. Your final score is {}.", state.score),
                    TerminalColor::Red,
                )?;
                Finish {
                    ending: Ending::WrongGuess,
                    score: Some(state.score),
                    winner: None,
                }
            }
        };
        Ok(Step::Finished(finish))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::run_mode;
    use crate::core::testing;

    fn play(input: &str, draws: Vec<u8>) -> (crate::core::game::ModeSummary, String) {
        let mut out = Vec::new();
        let summary = {
            let mut ctx = testing::context(input, &mut out, draws, []);
            run_mode::<SoloMode>(&mut ctx).unwrap()
        };
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn correct_higher_scores_a_point() {
        let (summary, text) = play("h\nq\n", vec![7, 9]);
        assert_eq!(summary.score, Some(1));
        assert_eq!(summary.ending, Ending::Quit);
        assert!(text.contains("The first number is 7."));
        assert!(text.contains("The next number is: 9"));
        assert!(text.contains("Good job! 9 is higher than 7."));
        assert!(text.contains("Current score: 1\nCurrent number: 9"));
        assert!(text.contains("Final score: 1. Returning to main menu."));
    }

    #[test]
    fn wrong_call_ends_with_unchanged_score() {
        let (summary, text) = play("l\n", vec![7, 9]);
        assert_eq!(summary.score, Some(0));
        assert_eq!(summary.ending, Ending::WrongGuess);
        assert!(text.contains("Oh no! 9 is higher than 7!"));
        assert!(text.contains("Game over. Your final score is 0."));
    }

    #[test]
    fn quit_right_away_draws_nothing() {
        // only the opening draw is scripted, a second draw would panic
        let (summary, text) = play("Q\n", vec![4]);
        assert_eq!(summary.score, Some(0));
        assert_eq!(summary.rounds, 1);
        assert!(!text.contains("The next number is"));
        assert!(text.contains("Final score: 0. Returning to main menu."));
    }

    #[test]
    fn score_climbs_by_one_per_correct_call() {
        let (summary, text) = play("h\nl\nh\nh\n", vec![2, 10, 3, 12, 1]);
        assert_eq!(summary.score, Some(3));
        assert_eq!(summary.rounds, 4);
        assert!(text.contains("Game over. Your final score is 3."));
    }

    #[test]
    fn padded_guess_is_an_invalid_choice() {
        let (summary, text) = play(" h\nh \nq\n", vec![6]);
        assert_eq!(summary.ending, Ending::Quit);
        assert_eq!(summary.score, Some(0));
        assert_eq!(text.matches("< Invalid choice, please try again! >").count(), 2);
        assert!(!text.contains("The next number is"));
    }

    #[test]
    fn invalid_input_reprompts_with_status() {
        let (_, text) = play("maybe\nq\n", vec![6]);
        assert!(text.contains("< Invalid choice, please try again! >\n\nCurrent score: 0\nCurrent number: 6"));
    }
}
