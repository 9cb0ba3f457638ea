//! Implementation of the `m365 graph schemaextension remove` command.

use anyhow::Result;

use m365_lib::commands::graph::schemaextension_remove::{SchemaExtensionRemoveOptions, remove_schema_extension};
use m365_lib::context::CommandContext;

use super::{finish, runtime};
use crate::GlobalArgs;
use crate::prompts::TerminalPrompt;

pub fn cmd_schemaextension_remove(id: String, confirm: bool, global: &GlobalArgs) -> Result<()> {
  let options = SchemaExtensionRemoveOptions { id, confirm };
  options.validate()?;

  let ctx = CommandContext::load()?;
  let rt = runtime()?;
  let outcome = rt.block_on(remove_schema_extension(&ctx, &options, &TerminalPrompt))?;

  finish(outcome, global);
  Ok(())
}
