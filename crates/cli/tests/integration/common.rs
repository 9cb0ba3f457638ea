//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use mockito::ServerGuard;
use tempfile::TempDir;

pub const TOKEN: &str = "test-token";

/// Isolated test environment.
///
/// Each test gets its own config directory and mock server. The binary is
/// pointed at the server through `M365_GRAPH_URL` and authenticated through
/// `M365_ACCESS_TOKEN`.
pub struct TestEnv {
  pub temp: TempDir,
  pub server: ServerGuard,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
      server: mockito::Server::new(),
    }
  }

  pub fn config_dir(&self) -> PathBuf {
    self.temp.path().join("config")
  }

  pub fn connection_file(&self) -> PathBuf {
    self.config_dir().join("connection.json")
  }

  /// Get a pre-configured Command for the m365 binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `M365_CONFIG_DIR`: isolated connection file location
  /// - `M365_GRAPH_URL`: the mock server
  /// - `M365_ACCESS_TOKEN`: a fake bearer token
  pub fn m365_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("m365");
    cmd.env("M365_CONFIG_DIR", self.config_dir());
    cmd.env("M365_GRAPH_URL", self.server.url());
    cmd.env("M365_ACCESS_TOKEN", TOKEN);
    cmd.env_remove("M365_SPO_URL");
    cmd.env_remove("RUST_LOG");
    cmd
  }

  /// Same as [`TestEnv::m365_cmd`] with SharePoint requests sent to the mock server.
  pub fn m365_spo_cmd(&self) -> Command {
    let mut cmd = self.m365_cmd();
    cmd.env("M365_SPO_URL", self.server.url());
    cmd
  }
}

pub fn bearer() -> String {
  format!("Bearer {}", TOKEN)
}
