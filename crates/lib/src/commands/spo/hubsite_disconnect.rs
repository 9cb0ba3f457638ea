//! `spo hubsite disconnect`

use tracing::info;

use crate::commands::{CommandError, Outcome};
use crate::consts::EMPTY_GUID;
use crate::context::CommandContext;
use crate::prompt::{Prompt, confirm_action};
use crate::request::{ACCEPT_SPO_JSON, ApiRequest, REQUEST_DIGEST_HEADER};
use crate::spo::get_request_digest;
use crate::validation::is_valid_sharepoint_url;

#[derive(Debug, Clone, Default)]
pub struct HubSiteDisconnectOptions {
  /// Site collection to disconnect from its hub site.
  pub url: String,
  /// Skip the confirmation prompt.
  pub confirm: bool,
}

impl HubSiteDisconnectOptions {
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

/// Disconnect a site collection from its hub site by joining the empty hub.
pub async fn disconnect_hub_site(
  ctx: &CommandContext,
  options: &HubSiteDisconnectOptions,
  prompt: &dyn Prompt,
) -> Result<Outcome, CommandError> {
  let message = format!(
    "Are you sure you want to disconnect the site {} from its hub site?",
    options.url
  );
  if !confirm_action(options.confirm, prompt, &message)? {
    return Ok(Outcome::Aborted);
  }

  let site_url = options.url.trim_end_matches('/');
  let digest = get_request_digest(ctx, site_url).await?;

  info!("Disconnecting site {} from its hub site...", site_url);

  ctx
    .client
    .send(
      ApiRequest::post(format!("{}/_api/site/JoinHubSite('{}')", site_url, EMPTY_GUID))
        .header(REQUEST_DIGEST_HEADER, digest.form_digest_value)
        .accept(ACCEPT_SPO_JSON),
    )
    .await?;

  Ok(Outcome::Completed)
}
