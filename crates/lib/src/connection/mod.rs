//! Persisted connection to Microsoft 365.
//!
//! The connection holds bearer tokens acquired outside this tool and the
//! tenant SharePoint URL. It is stored as JSON in the config directory:
//!
//! ```text
//! {config_dir}/connection.json
//! ```
//!
//! Tokens are looked up by the origin of the URL being called, falling back
//! to the default `access_token`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::{ENV_ACCESS_TOKEN, ENV_SPO_URL};

/// Errors that can occur while loading or using the connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
  #[error("failed to read connection file")]
  Read(#[source] io::Error),

  #[error("failed to write connection file")]
  Write(#[source] io::Error),

  #[error("failed to create config directory")]
  CreateDir(#[source] io::Error),

  #[error("failed to parse connection file")]
  Parse(#[source] serde_json::Error),

  #[error("failed to serialize connection")]
  Serialize(#[source] serde_json::Error),

  /// No token is available for the requested resource.
  #[error("Log in to Microsoft 365 first")]
  NotLoggedIn,

  #[error("'{0}' is not a valid URL")]
  InvalidUrl(String),
}

/// Stored authentication context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
  /// Token used for any resource without a dedicated entry in `tokens`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub access_token: Option<String>,

  /// Resource origin (e.g. `https://contoso.sharepoint.com`) -> token.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub tokens: BTreeMap<String, String>,

  /// Tenant root SharePoint URL, discovered lazily when unset.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub spo_url: Option<String>,
}

impl Connection {
  /// Load the connection from `path`.
  ///
  /// Returns a disconnected connection if the file doesn't exist.
  pub fn load(path: &Path) -> Result<Self, ConnectionError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "no connection file");
        return Ok(Self::default());
      }
      Err(e) => return Err(ConnectionError::Read(e)),
    };

    serde_json::from_str(&content).map_err(ConnectionError::Parse)
  }

  /// Save the connection to `path`.
  ///
  /// Uses atomic write (write to temp, then rename).
  pub fn save(&self, path: &Path) -> Result<(), ConnectionError> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(ConnectionError::CreateDir)?;
    }

    let content = serde_json::to_string_pretty(self).map_err(ConnectionError::Serialize)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(ConnectionError::Write)?;
    fs::rename(&temp_path, path).map_err(ConnectionError::Write)?;

    debug!(path = %path.display(), "connection saved");
    Ok(())
  }

  /// Remove the connection file at `path`. Missing files are not an error.
  pub fn remove(path: &Path) -> Result<(), ConnectionError> {
    match fs::remove_file(path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(ConnectionError::Write(e)),
    }
  }

  /// Apply `M365_ACCESS_TOKEN` and `M365_SPO_URL` on top of the stored values.
  pub fn with_env_overrides(mut self) -> Self {
    if let Some(token) = non_empty_var(ENV_ACCESS_TOKEN) {
      self.access_token = Some(token);
    }
    if let Some(url) = non_empty_var(ENV_SPO_URL) {
      self.spo_url = Some(url.trim_end_matches('/').to_string());
    }
    self
  }

  /// Whether any token is available.
  pub fn is_connected(&self) -> bool {
    self.access_token.is_some() || !self.tokens.is_empty()
  }

  /// Store a token, either as the default or for a specific resource.
  pub fn set_token(&mut self, resource: Option<&str>, token: String) -> Result<(), ConnectionError> {
    match resource {
      Some(resource) => {
        self.tokens.insert(resource_origin(resource)?, token);
      }
      None => self.access_token = Some(token),
    }
    Ok(())
  }

  /// Token to use when calling `url`.
  pub fn token_for(&self, url: &str) -> Result<&str, ConnectionError> {
    let origin = resource_origin(url)?;
    self
      .tokens
      .get(&origin)
      .or(self.access_token.as_ref())
      .map(String::as_str)
      .ok_or(ConnectionError::NotLoggedIn)
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Scheme, host and port of `url`, e.g. `https://contoso.sharepoint.com`.
pub fn resource_origin(url: &str) -> Result<String, ConnectionError> {
  let parsed = Url::parse(url).map_err(|_| ConnectionError::InvalidUrl(url.to_string()))?;
  if !parsed.has_host() {
    return Err(ConnectionError::InvalidUrl(url.to_string()));
  }
  Ok(parsed.origin().ascii_serialization())
}
