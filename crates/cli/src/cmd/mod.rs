mod app_uninstall;
mod hubsite_disconnect;
mod login;
mod o365group_add;
mod schemaextension_remove;
mod sitescript_set;
mod spo_set;
mod status;

pub use app_uninstall::cmd_app_uninstall;
pub use hubsite_disconnect::cmd_hubsite_disconnect;
pub use login::{cmd_login, cmd_logout};
pub use o365group_add::cmd_o365group_add;
pub use schemaextension_remove::cmd_schemaextension_remove;
pub use sitescript_set::cmd_sitescript_set;
pub use spo_set::cmd_spo_set;
pub use status::cmd_status;

use anyhow::{Context, Result};
use m365_lib::commands::Outcome;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::GlobalArgs;
use crate::output::print_success;

fn runtime() -> Result<Runtime> {
  Runtime::new().context("Failed to create async runtime")
}

/// Print `DONE` after a successful command in verbose or debug mode.
fn print_done(global: &GlobalArgs) {
  if (global.verbose || global.debug) && !global.output.is_json() {
    print_success("DONE");
  }
}

/// Report the outcome of a command that asked for confirmation.
fn finish(outcome: Outcome, global: &GlobalArgs) {
  match outcome {
    Outcome::Completed => print_done(global),
    Outcome::Aborted => debug!("confirmation declined, nothing changed"),
  }
}
