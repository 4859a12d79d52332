use anyhow::Result;
use clap::Parser;
use overunder::cli::{run_cli, Cli};
use overunder::core::terminal::ConsoleError;
use overunder::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run_cli(&cli) {
        // stdin closed mid-game: nothing left to play, leave quietly
        Err(err) if matches!(err.downcast_ref::<ConsoleError>(), Some(ConsoleError::InputClosed)) => {
            tracing::info!("input closed, exiting");
            println!();
            Ok(())
        }
        other => other,
    }
}
