//! Implementation of the `m365 spo set` command.

use anyhow::Result;

use m365_lib::commands::spo::set::{SpoSetOptions, set_spo_url};
use m365_lib::context::CommandContext;

use super::print_done;
use crate::GlobalArgs;

pub fn cmd_spo_set(url: String, global: &GlobalArgs) -> Result<()> {
  let options = SpoSetOptions { url };
  options.validate()?;

  let mut ctx = CommandContext::load()?;
  set_spo_url(&mut ctx, &options)?;

  print_done(global);
  Ok(())
}
