//! Per-invocation state shared by commands.

use std::path::PathBuf;

use tracing::debug;

use crate::connection::{Connection, ConnectionError};
use crate::consts::{ENV_GRAPH_URL, GRAPH_URL};
use crate::platform::paths::connection_path;
use crate::request::{RequestClient, RequestError};

/// Authenticated client plus the connection it was created from.
#[derive(Debug, Clone)]
pub struct CommandContext {
  pub client: RequestClient,
  pub connection: Connection,
  graph_url: String,
  connection_path: Option<PathBuf>,
}

impl CommandContext {
  /// Create a context that does not persist connection changes.
  pub fn new(connection: Connection) -> Result<Self, RequestError> {
    let graph_url = std::env::var(ENV_GRAPH_URL)
      .ok()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| GRAPH_URL.to_string());

    Ok(Self {
      client: RequestClient::new(connection.clone())?,
      connection,
      graph_url: graph_url.trim_end_matches('/').to_string(),
      connection_path: None,
    })
  }

  /// Load the stored connection (with environment overrides) from the config directory.
  ///
  /// Fails with [`ConnectionError::NotLoggedIn`] when no token is available.
  pub fn load() -> Result<Self, crate::commands::CommandError> {
    let path = connection_path();
    let connection = Connection::load(&path)?.with_env_overrides();
    if !connection.is_connected() {
      return Err(ConnectionError::NotLoggedIn.into());
    }

    debug!(path = %path.display(), "loaded connection");
    Ok(Self::new(connection)?.with_connection_path(path))
  }

  pub fn with_graph_url(mut self, url: impl Into<String>) -> Self {
    self.graph_url = url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn with_connection_path(mut self, path: PathBuf) -> Self {
    self.connection_path = Some(path);
    self
  }

  pub fn graph_url(&self) -> &str {
    &self.graph_url
  }

  /// Absolute Graph URL for `path` (e.g. `/v1.0/groups`).
  pub fn graph(&self, path: &str) -> String {
    format!("{}{}", self.graph_url, path)
  }

  /// Persist the SharePoint URL if this context was loaded from disk.
  ///
  /// The stored file is re-read so tokens that came from the environment are
  /// never written to it.
  pub fn persist_connection(&self) -> Result<(), ConnectionError> {
    let Some(path) = &self.connection_path else {
      return Ok(());
    };

    let mut stored = Connection::load(path)?;
    stored.spo_url = self.connection.spo_url.clone();
    stored.save(path)
  }
}
