use crate::consts::{APP_NAME, CONNECTION_FILENAME, ENV_CONFIG_DIR};
use std::path::PathBuf;

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  std::env::var("USERPROFILE")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  std::env::var("HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the directory for configuration files for the application
///
/// `M365_CONFIG_DIR` takes precedence over the platform location.
#[cfg(windows)]
pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
    return PathBuf::from(dir);
  }
  std::env::var("APPDATA")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir())
    .join(APP_NAME)
}

/// Returns the directory for configuration files for the application
///
/// `M365_CONFIG_DIR` takes precedence over the XDG location.
#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
    return PathBuf::from(dir);
  }
  let config_home = std::env::var("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".config"));
  config_home.join(APP_NAME)
}

/// Returns the path of the persisted connection file
pub fn connection_path() -> PathBuf {
  config_dir().join(CONNECTION_FILENAME)
}
