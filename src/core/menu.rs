use anyhow::Result;
use tracing::{debug, info};

use crate::core::game::{Context, ModeSummary};
use crate::core::terminal::{Console, ConsoleError, TerminalColor};
use crate::games::ModeEntry;

pub enum MenuChoice {
    Launch(ModeEntry),
    Quit,
    Invalid(String),
}

/// Top-level loop: instructions once, then menu → mode → menu until "q"
pub struct MainMenu {
    modes: Vec<ModeEntry>,
    best_score: Option<u32>,
    history: Vec<ModeSummary>,
}

impl MainMenu {
    pub fn new(modes: Vec<ModeEntry>) -> Self {
        Self {
            modes,
            best_score: None,
            history: Vec::new(),
        }
    }

    /// Best solo score reached in this process
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// Run until the player quits; returns every finished mode in order
    pub fn run(&mut self, ctx: &mut Context<'_>) -> Result<Vec<ModeSummary>> {
        show_instructions(&mut ctx.console)?;
        info!("session started");

        loop {
            self.render(&mut ctx.console)?;
            let token = ctx.console.read_token()?;
            match self.choose(&token) {
                MenuChoice::Quit => {
                    ctx.console.empty_line()?;
                    ctx.console
                        .print_colored_line("*** Thanks for playing, see you again soon! ***", TerminalColor::Cyan)?;
                    ctx.console.empty_line()?;
                    ctx.console.flush()?;
                    info!(modes_played = self.history.len(), best_score = ?self.best_score(), "session ended");
                    return Ok(self.history.clone());
                }
                MenuChoice::Launch(entry) => {
                    debug!(mode = entry.info.id, "menu dispatch");
                    let summary = (entry.launcher)(ctx)?;
                    self.record(summary, &mut ctx.console)?;
                }
                MenuChoice::Invalid(token) => {
                    debug!(token = %token, "invalid menu command");
                    ctx.console.empty_line()?;
                    ctx.console
                        .print_colored_line("< Invalid command. Please try again! >", TerminalColor::Yellow)?;
                }
            }
        }
    }

    pub fn choose(&self, token: &str) -> MenuChoice {
        if token == "q" {
            return MenuChoice::Quit;
        }
        match self.modes.iter().find(|m| m.info.key == token) {
            Some(entry) => MenuChoice::Launch(entry.clone()),
            None => MenuChoice::Invalid(token.to_string()),
        }
    }

    fn record(&mut self, summary: ModeSummary, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        if let Some(score) = summary.score {
            if score > self.best_score.unwrap_or(0) {
                self.best_score = Some(score);
                console.print_colored_line(&format!("New session best: {}!", score), TerminalColor::Green)?;
            } else if self.best_score.is_none() {
                self.best_score = Some(score);
            }
        }
        self.history.push(summary);
        Ok(())
    }

    fn render(&self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        console.empty_line()?;
        console.print_colored_line("*** Main Menu: ***", TerminalColor::Cyan)?;
        console.empty_line()?;
        for entry in &self.modes {
            console.print_line(&format!("[{}]: {}", entry.info.key, entry.info.description))?;
        }
        console.print_line("[q]: Quit")?;
        console.empty_line()?;
        console.print("Enter a command: ")
    }
}

/// Shown once at process start
pub fn show_instructions(console: &mut Console<'_>) -> Result<(), ConsoleError> {
    console.empty_line()?;
    console.print_colored_line("*** Let's play the Over/Under Game! ***", TerminalColor::Cyan)?;
    console.empty_line()?;
    console.print_line("The goal of this game is to take turns guessing if the")?;
    console.print_line("next random number will be higher or lower than the")?;
    console.print_line("current number. You can play by yourself, against ")?;
    console.print_line("a friend, or against the computer.")
}
