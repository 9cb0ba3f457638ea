//! `login`, `logout` and `status`.
//!
//! Tokens are acquired outside this tool; `login` only stores them.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::commands::CommandError;
use crate::connection::Connection;
use crate::validation::is_valid_sharepoint_url;

#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
  pub access_token: String,
  /// Resource the token is for; the token becomes the default when unset.
  pub resource: Option<String>,
  pub spo_url: Option<String>,
}

impl LoginOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if self.access_token.trim().is_empty() {
      return Err(CommandError::Validation("Access token must not be empty".to_string()));
    }

    if let Some(url) = &self.spo_url {
      if !is_valid_sharepoint_url(url) {
        return Err(CommandError::Validation(format!(
          "{} is not a valid SharePoint Online site URL",
          url
        )));
      }
    }

    Ok(())
  }
}

/// Connection summary printed by `status`. Never contains token values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
  pub connected: bool,
  pub default_token: bool,
  pub resources: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub spo_url: Option<String>,
}

impl From<&Connection> for ConnectionStatus {
  fn from(connection: &Connection) -> Self {
    Self {
      connected: connection.is_connected(),
      default_token: connection.access_token.is_some(),
      resources: connection.tokens.keys().cloned().collect(),
      spo_url: connection.spo_url.clone(),
    }
  }
}

/// Store a token in the connection file at `path`, keeping existing entries.
pub fn login(path: &Path, options: &LoginOptions) -> Result<ConnectionStatus, CommandError> {
  let mut connection = Connection::load(path)?;
  connection.set_token(options.resource.as_deref(), options.access_token.trim().to_string())?;

  if let Some(url) = &options.spo_url {
    connection.spo_url = Some(url.trim_end_matches('/').to_string());
  }

  connection.save(path)?;
  info!(resource = options.resource.as_deref().unwrap_or("*"), "token stored");

  Ok(ConnectionStatus::from(&connection))
}

/// Forget the stored connection.
pub fn logout(path: &Path) -> Result<(), CommandError> {
  Connection::remove(path)?;
  info!("connection removed");
  Ok(())
}

/// Describe the current connection, including environment overrides.
pub fn status(path: &Path) -> Result<ConnectionStatus, CommandError> {
  let connection = Connection::load(path)?.with_env_overrides();
  Ok(ConnectionStatus::from(&connection))
}
