use std::io::{self, IsTerminal, Write};

use m365_lib::prompt::{Prompt, PromptError};

/// Asks for confirmation on the terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
  fn confirm(&self, message: &str) -> Result<bool, PromptError> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
      return Err(PromptError(
        "Cannot prompt for confirmation in non-interactive mode. Use --confirm to proceed.".to_string(),
      ));
    }

    ask(message).map_err(|e| PromptError(format!("Failed to read confirmation: {}", e)))
  }
}

fn ask(message: &str) -> io::Result<bool> {
  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
  matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
