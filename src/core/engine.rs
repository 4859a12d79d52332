use anyhow::Result;
use tracing::{debug, info};

use crate::core::game::{Context, GameMode, ModeSummary, Step};
use crate::core::renderer;

/// Drive one invocation of `G` from intro to its terminal step.
pub fn run_mode<G: GameMode>(ctx: &mut Context<'_>) -> Result<ModeSummary> {
    info!(mode = G::NAME, "mode started");
    renderer::announce_mode(&mut ctx.console, G::BANNER, G::EXTRA_RULES)?;

    let first = ctx.first_draw();
    debug!(first, "free opening draw");
    ctx.console.print_line(&format!("The first number is {}.", first))?;

    let mut state = G::new_game(first);
    let mut rounds = 0;
    loop {
        rounds += 1;
        if let Step::Finished(finish) = G::turn(&mut state, ctx)? {
            info!(
                mode = G::NAME,
                rounds,
                ending = ?finish.ending,
                score = ?finish.score,
                winner = ?finish.winner,
                "mode finished"
            );
            ctx.console.flush()?;
            return Ok(ModeSummary {
                mode: G::NAME,
                rounds,
                ending: finish.ending,
                score: finish.score,
                winner: finish.winner,
            });
        }
    }
}
