//! Line-oriented terminal context: every prompt, narration line and read goes through here.

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    InputClosed,
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub struct Console<'io> {
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
    color: bool,
}

impl<'io> Console<'io> {
    pub fn new(input: impl BufRead + 'io, output: impl Write + 'io, color: bool) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            color,
        }
    }

    /// Console bound to the process stdin/stdout
    pub fn stdio(color: bool) -> Console<'static> {
        Console::new(io::stdin().lock(), io::stdout(), color)
    }

    /// Print a line
    pub fn print_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a colored line, falls back to plain text when color is off
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> Result<(), ConsoleError> {
        if self.color {
            self.output.queue(SetForegroundColor(color.into()))?;
            writeln!(self.output, "{}", text)?;
            self.output.queue(ResetColor)?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    pub fn empty_line(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        self.output.flush()?;
        Ok(())
    }

    /// Read one line and lowercase it. Only the line terminator is stripped, so padded
    /// tokens such as `" h"` stay padded and fail validation.
    pub fn read_token(&mut self) -> Result<String, ConsoleError> {
        self.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("stdin reached end of input");
            return Err(ConsoleError::InputClosed);
        }
        let token = line.trim_end_matches(['\r', '\n']).to_lowercase();
        debug!(token = %token, "read token");
        Ok(token)
    }

    /// Show `prompt` and read until the answer is one of `valid`.
    ///
    /// Anything else prints the invalid-choice notice and shows the whole prompt again,
    /// so the caller never sees a bad token.
    pub fn read_command(&mut self, prompt: &[String], valid: &[&str]) -> Result<String, ConsoleError> {
        loop {
            for line in prompt {
                self.print_line(line)?;
            }
            let token = self.read_token()?;
            if valid.contains(&token.as_str()) {
                return Ok(token);
            }
            debug!(token = %token, ?valid, "rejected command");
            self.print_colored_line("< Invalid choice, please try again! >", TerminalColor::Yellow)?;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Magenta => Color::Magenta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_token_lowercases_and_strips_the_line_ending() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("H\r\n  L \nq"), &mut out, false);
        assert_eq!(console.read_token().unwrap(), "h");
        assert_eq!(console.read_token().unwrap(), "  l ");
        assert_eq!(console.read_token().unwrap(), "q");
    }

    #[test]
    fn padded_tokens_are_invalid_commands() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new(" h\nh \nh\n"), &mut out, false);
            let prompt = vec!["Pick one:".to_string()];
            assert_eq!(console.read_command(&prompt, &["h", "l", "q"]).unwrap(), "h");
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("< Invalid choice, please try again! >").count(), 2);
    }

    #[test]
    fn read_command_reprompts_until_valid() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new("x\n\nL\n"), &mut out, false);
            let prompt = vec!["Pick one:".to_string()];
            assert_eq!(console.read_command(&prompt, &["h", "l", "q"]).unwrap(), "l");
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Pick one:").count(), 3);
        assert_eq!(text.matches("< Invalid choice, please try again! >").count(), 2);
    }

    #[test]
    fn closed_input_is_reported() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut out, false);
        assert!(matches!(console.read_token(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn colored_lines_carry_escape_codes() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new(""), &mut out, true);
            console.print_colored_line("hello", TerminalColor::Green).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("hello"));
        assert!(text.contains('\u{1b}'));
    }
}
