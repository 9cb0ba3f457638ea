//! `spo app uninstall`

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::commands::{CommandError, Outcome};
use crate::context::CommandContext;
use crate::prompt::{Prompt, confirm_action};
use crate::request::{ACCEPT_SPO_JSON, ApiRequest};
use crate::validation::{is_valid_guid, is_valid_sharepoint_url};

/// App catalog the app was installed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppCatalogScope {
  #[default]
  Tenant,
  SiteCollection,
}

impl AppCatalogScope {
  pub fn as_str(self) -> &'static str {
    match self {
      AppCatalogScope::Tenant => "tenant",
      AppCatalogScope::SiteCollection => "sitecollection",
    }
  }
}

impl fmt::Display for AppCatalogScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AppCatalogScope {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "tenant" => Ok(AppCatalogScope::Tenant),
      "sitecollection" => Ok(AppCatalogScope::SiteCollection),
      _ => Err("Scope must be either 'tenant' or 'sitecollection' if specified".to_string()),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct AppUninstallOptions {
  /// App ID in the app catalog.
  pub id: String,
  /// Site to uninstall the app from.
  pub site_url: String,
  /// `tenant` (default) or `sitecollection`.
  pub scope: Option<String>,
  /// Skip the confirmation prompt.
  pub confirm: bool,
}

impl AppUninstallOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if !is_valid_guid(&self.id) {
      return Err(CommandError::Validation(format!("{} is not a valid GUID", self.id)));
    }

    if !is_valid_sharepoint_url(&self.site_url) {
      return Err(CommandError::Validation(format!(
        "{} is not a valid SharePoint Online site URL",
        self.site_url
      )));
    }

    self.scope()?;
    Ok(())
  }

  pub fn scope(&self) -> Result<AppCatalogScope, CommandError> {
    match &self.scope {
      Some(scope) => scope.parse().map_err(CommandError::Validation),
      None => Ok(AppCatalogScope::default()),
    }
  }
}

/// Uninstall an app from a site.
pub async fn uninstall_app(
  ctx: &CommandContext,
  options: &AppUninstallOptions,
  prompt: &dyn Prompt,
) -> Result<Outcome, CommandError> {
  let scope = options.scope()?;

  let message = format!(
    "Are you sure you want to uninstall the app {} from site {}?",
    options.id, options.site_url
  );
  if !confirm_action(options.confirm, prompt, &message)? {
    return Ok(Outcome::Aborted);
  }

  info!("Uninstalling app {} from site {}...", options.id, options.site_url);

  let url = format!(
    "{}/_api/web/{}appcatalog/AvailableApps/GetById('{}')/uninstall",
    options.site_url.trim_end_matches('/'),
    scope,
    options.id
  );

  ctx.client.send(ApiRequest::post(url).accept(ACCEPT_SPO_JSON)).await?;

  Ok(Outcome::Completed)
}
