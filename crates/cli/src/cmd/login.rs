//! Implementation of the `m365 login` and `m365 logout` commands.

use anyhow::Result;

use m365_lib::commands::login::{LoginOptions, login, logout};
use m365_lib::platform::paths::connection_path;

use crate::GlobalArgs;
use crate::output::{print_json, print_success};

pub fn cmd_login(
  access_token: String,
  resource: Option<String>,
  spo_url: Option<String>,
  global: &GlobalArgs,
) -> Result<()> {
  let options = LoginOptions {
    access_token,
    resource,
    spo_url,
  };
  options.validate()?;

  let status = login(&connection_path(), &options)?;

  if global.output.is_json() {
    print_json(&status)?;
  } else {
    match &options.resource {
      Some(resource) => print_success(&format!("Logged in to {}", resource)),
      None => print_success("Logged in"),
    }
  }

  Ok(())
}

pub fn cmd_logout(global: &GlobalArgs) -> Result<()> {
  logout(&connection_path())?;

  if !global.output.is_json() {
    print_success("Logged out");
  }

  Ok(())
}
