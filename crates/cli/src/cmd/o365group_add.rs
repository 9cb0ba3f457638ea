//! Implementation of the `m365 aad o365group add` command.

use anyhow::Result;

use m365_lib::commands::aad::o365group_add::{O365GroupAddOptions, add_group};
use m365_lib::context::CommandContext;

use super::{print_done, runtime};
use crate::GlobalArgs;
use crate::output::{or_dash, print_json, print_stat, print_success};

/// Create the group and print it.
///
/// In text mode only the main properties are shown; `--output json` prints
/// everything Graph returned.
pub fn cmd_o365group_add(options: O365GroupAddOptions, global: &GlobalArgs) -> Result<()> {
  options.validate()?;

  let ctx = CommandContext::load()?;
  let rt = runtime()?;
  let group = rt.block_on(add_group(&ctx, &options))?;

  if global.output.is_json() {
    print_json(&group)?;
  } else {
    print_success(&format!("Created group {}", or_dash(group.display_name.as_deref())));
    print_stat("Id", &group.id);
    print_stat("Mail", or_dash(group.mail.as_deref()));
    print_stat("Visibility", or_dash(group.visibility.as_deref()));
  }

  print_done(global);
  Ok(())
}
