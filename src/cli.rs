use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::config::{GameConfig, OpponentStrategy};
use crate::core::game::{Context, ModeSummary};
use crate::core::menu::MainMenu;
use crate::core::terminal::Console;
use crate::games::{get_all_modes, get_mode};

#[derive(Parser, Debug)]
#[command(name = "overunder")]
#[command(about = "Guess whether the next number from 1 to 13 is higher or lower")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the draws and coin flips for a reproducible session
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the suspense pauses
    #[arg(long, global = true)]
    pub fast: bool,

    /// Plain output without colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How the computer opponent calls
    #[arg(long, value_enum, default_value_t = OpponentStrategy::CoinFlip, global = true)]
    pub opponent: OpponentStrategy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a single mode, then exit
    Play {
        /// Mode id ("solo", "friend", "computer") or menu key ("1", "2", "3")
        mode: String,
    },
    /// List available modes
    List,
}

/// Run whatever `cli` asks for against stdin/stdout
pub fn run_cli(cli: &Cli) -> Result<()> {
    let config = GameConfig::from(cli);
    let console = Console::stdio(config.color);
    let mut ctx = Context::from_config(&config, console);
    let summaries = dispatch(cli.command.as_ref(), &mut ctx)?;
    for summary in &summaries {
        debug!(
            mode = summary.mode,
            rounds = summary.rounds,
            ending = ?summary.ending,
            score = ?summary.score,
            winner = ?summary.winner,
            "mode summary"
        );
    }
    info!(modes_played = summaries.len(), "session over");
    Ok(())
}

/// Route a subcommand; no subcommand means the interactive menu
pub fn dispatch(command: Option<&Commands>, ctx: &mut Context<'_>) -> Result<Vec<ModeSummary>> {
    match command {
        Some(Commands::Play { mode }) => {
            let entry = get_mode(mode).ok_or_else(|| {
                let known: Vec<&str> = get_all_modes().iter().map(|m| m.info.id).collect();
                anyhow!("mode '{}' not found, available modes: {}", mode, known.join(", "))
            })?;
            info!(mode = entry.info.id, "playing a single mode");
            let summary = (entry.launcher)(ctx)?;
            Ok(vec![summary])
        }
        Some(Commands::List) => {
            ctx.console.print_line("Available modes:")?;
            ctx.console.empty_line()?;
            for mode in get_all_modes() {
                ctx.console
                    .print_line(&format!("[{}] {:<9} {}", mode.info.key, mode.info.id, mode.info.description))?;
            }
            ctx.console.flush()?;
            Ok(Vec::new())
        }
        None => MainMenu::new(get_all_modes()).run(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing;

    #[test]
    fn play_accepts_a_menu_key() {
        let mut out = Vec::new();
        let summaries = {
            let mut ctx = testing::context("q\n", &mut out, vec![11], vec![]);
            let command = Commands::Play { mode: "1".to_string() };
            dispatch(Some(&command), &mut ctx).unwrap()
        };
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].mode, "solo");
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Main Menu"));
    }

    #[test]
    fn play_rejects_unknown_modes() {
        let mut out = Vec::new();
        let mut ctx = testing::context("", &mut out, vec![], vec![]);
        let command = Commands::Play { mode: "chess".to_string() };
        let err = dispatch(Some(&command), &mut ctx).unwrap_err();
        assert!(err.to_string().contains("solo, friend, computer"));
    }

    #[test]
    fn list_prints_every_mode() {
        let mut out = Vec::new();
        {
            let mut ctx = testing::context("", &mut out, vec![], vec![]);
            dispatch(Some(&Commands::List), &mut ctx).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1] solo"));
        assert!(text.contains("[3] computer"));
    }

    #[test]
    fn subcommand_is_optional() {
        let cli = Cli::parse_from(["overunder"]);
        assert!(cli.command.is_none());
        let cli = Cli::parse_from(["overunder", "play", "friend", "--fast"]);
        assert!(cli.fast);
        assert!(matches!(cli.command, Some(Commands::Play { ref mode }) if mode == "friend"));
    }
}
