//! Implementation of the `m365 spo app uninstall` command.

use anyhow::Result;

use m365_lib::commands::spo::app_uninstall::{AppUninstallOptions, uninstall_app};
use m365_lib::context::CommandContext;

use super::{finish, runtime};
use crate::GlobalArgs;
use crate::prompts::TerminalPrompt;

pub fn cmd_app_uninstall(
  id: String,
  site_url: String,
  scope: Option<String>,
  confirm: bool,
  global: &GlobalArgs,
) -> Result<()> {
  let options = AppUninstallOptions {
    id,
    site_url,
    scope,
    confirm,
  };
  options.validate()?;

  let ctx = CommandContext::load()?;
  let rt = runtime()?;
  let outcome = rt.block_on(uninstall_app(&ctx, &options, &TerminalPrompt))?;

  finish(outcome, global);
  Ok(())
}
