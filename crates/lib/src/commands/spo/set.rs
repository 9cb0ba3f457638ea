//! `spo set`

use tracing::info;

use crate::commands::CommandError;
use crate::context::CommandContext;
use crate::validation::is_valid_sharepoint_url;

#[derive(Debug, Clone, Default)]
pub struct SpoSetOptions {
  /// Tenant root SharePoint URL, e.g. `https://contoso.sharepoint.com`.
  pub url: String,
}

impl SpoSetOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if !is_valid_sharepoint_url(&self.url) {
      return Err(CommandError::Validation(format!(
        "{} is not a valid SharePoint Online site URL",
        self.url
      )));
    }
    Ok(())
  }
}

/// Store the tenant SharePoint URL used by commands that need it.
pub fn set_spo_url(ctx: &mut CommandContext, options: &SpoSetOptions) -> Result<(), CommandError> {
  let url = options.url.trim_end_matches('/').to_string();
  info!("Setting SharePoint URL to {}...", url);

  ctx.connection.spo_url = Some(url);
  ctx.persist_connection()?;
  Ok(())
}
