//! Command implementations.
//!
//! Each command exposes an options struct with a `validate` method and an
//! async entry point taking a [`CommandContext`](crate::context::CommandContext).
//! Destructive commands also take a [`Prompt`](crate::prompt::Prompt) and
//! return an [`Outcome`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::connection::ConnectionError;
use crate::prompt::PromptError;
use crate::request::RequestError;

pub mod aad;
pub mod graph;
pub mod login;
pub mod spo;

/// Errors surfaced by commands.
///
/// The display text of every variant is the message shown to the user;
/// underlying causes are reported through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum CommandError {
  /// An option failed validation.
  #[error("{0}")]
  Validation(String),

  #[error(transparent)]
  Request(#[from] RequestError),

  #[error(transparent)]
  Connection(#[from] ConnectionError),

  #[error(transparent)]
  Prompt(#[from] PromptError),

  #[error("failed to read {}", .path.display())]
  ReadFile {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Task(#[from] tokio::task::JoinError),
}

/// Result of a command that asks for confirmation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Completed,
  /// The user declined the prompt; nothing was changed.
  Aborted,
}
