//! Button presses typed at the terminal.

use shared::error::HostError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Increment,
    Decrement,
    Reset,
    Show,
    Save,
    Help,
    Quit,
}

impl UserCommand {
    /// Blank input parses to `None`.
    pub fn parse(input: &str) -> Result<Option<Self>, HostError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let command = match trimmed.to_ascii_lowercase().as_str() {
            "inc" | "+" | "i" => Self::Increment,
            "dec" | "-" | "d" => Self::Decrement,
            "reset" | "res" | "r" => Self::Reset,
            "show" | "s" => Self::Show,
            "save" => Self::Save,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(HostError::UnknownCommand(trimmed.to_string())),
        };
        Ok(Some(command))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
            Self::Show => "show",
            Self::Save => "save",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

pub const HELP_TEXT: &str = "\
commands:
  inc, +     raise the score
  dec, -     lower the score (disabled once won)
  reset, r   back to zero
  show, s    redraw the score
  save       persist the score now
  quit, q    save and exit";
