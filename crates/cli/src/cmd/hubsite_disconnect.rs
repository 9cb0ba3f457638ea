//! Implementation of the `m365 spo hubsite disconnect` command.

use anyhow::Result;

use m365_lib::commands::spo::hubsite_disconnect::{HubSiteDisconnectOptions, disconnect_hub_site};
use m365_lib::context::CommandContext;

use super::{finish, runtime};
use crate::GlobalArgs;
use crate::prompts::TerminalPrompt;

pub fn cmd_hubsite_disconnect(url: String, confirm: bool, global: &GlobalArgs) -> Result<()> {
  let options = HubSiteDisconnectOptions { url, confirm };
  options.validate()?;

  let ctx = CommandContext::load()?;
  let rt = runtime()?;
  let outcome = rt.block_on(disconnect_hub_site(&ctx, &options, &TerminalPrompt))?;

  finish(outcome, global);
  Ok(())
}
