//! Implementation of the `m365 spo sitescript set` command.

use anyhow::Result;

use m365_lib::commands::spo::sitescript_set::{SiteScriptSetOptions, set_site_script};
use m365_lib::context::CommandContext;

use super::{print_done, runtime};
use crate::GlobalArgs;
use crate::output::{or_dash, print_json, print_stat, print_success};

pub fn cmd_sitescript_set(options: SiteScriptSetOptions, global: &GlobalArgs) -> Result<()> {
  options.validate()?;

  let mut ctx = CommandContext::load()?;
  let rt = runtime()?;
  let script = rt.block_on(set_site_script(&mut ctx, &options))?;

  if global.output.is_json() {
    print_json(&script)?;
  } else {
    print_success(&format!("Updated site script {}", script.id));
    print_stat("Title", or_dash(script.title.as_deref()));
    print_stat("Description", or_dash(script.description.as_deref()));
    let version = script.version.map(|v| v.to_string());
    print_stat("Version", or_dash(version.as_deref()));
  }

  print_done(global);
  Ok(())
}
