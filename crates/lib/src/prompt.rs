//! Confirmation before destructive actions.

use thiserror::Error;

/// The prompt could not be shown or answered.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PromptError(pub String);

/// Asks the user a yes/no question.
pub trait Prompt {
  fn confirm(&self, message: &str) -> Result<bool, PromptError>;
}

/// Whether a destructive action may proceed.
///
/// `confirmed` is the value of the command's `--confirm` flag; when set the
/// prompt is skipped.
pub fn confirm_action(confirmed: bool, prompt: &dyn Prompt, message: &str) -> Result<bool, PromptError> {
  if confirmed {
    return Ok(true);
  }
  prompt.confirm(message)
}
