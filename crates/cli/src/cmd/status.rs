//! Status command implementation.
//!
//! Displays whether a token is stored, for which resources, and the
//! SharePoint URL in use. Token values are never printed.

use anyhow::Result;

use m365_lib::commands::login::status;
use m365_lib::platform::paths::connection_path;

use crate::GlobalArgs;
use crate::output::{self, or_dash, print_info, print_json, print_stat, print_success};

pub fn cmd_status(global: &GlobalArgs) -> Result<()> {
  let current = status(&connection_path())?;

  if global.output.is_json() {
    return print_json(&current);
  }

  if !current.connected {
    print_info("Logged out. Run 'm365 login' to connect.");
    return Ok(());
  }

  print_success("Logged in");
  print_stat("Default token", if current.default_token { "yes" } else { "no" });
  print_stat("SharePoint URL", or_dash(current.spo_url.as_deref()));

  if !current.resources.is_empty() {
    println!();
    println!("Resources:");
    for resource in &current.resources {
      println!("  {} {}", output::symbols::INFO, resource);
    }
  }

  Ok(())
}
