//! SharePoint helpers shared by `spo` commands.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::CommandError;
use crate::context::CommandContext;
use crate::request::{ACCEPT_GRAPH_JSON, ACCEPT_SPO_JSON, ApiRequest};

/// Response of `/_api/contextinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextInfo {
  pub form_digest_value: String,
  #[serde(default)]
  pub form_digest_timeout_seconds: Option<u64>,
  #[serde(default)]
  pub web_full_url: Option<String>,
  #[serde(default)]
  pub site_full_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RootSite {
  web_url: String,
}

/// Tenant root SharePoint URL.
///
/// Uses the URL stored in the connection; otherwise asks Graph for the root
/// site, caches the answer and persists the connection.
pub async fn get_spo_url(ctx: &mut CommandContext) -> Result<String, CommandError> {
  if let Some(url) = &ctx.connection.spo_url {
    debug!(url = %url, "using stored SharePoint URL");
    return Ok(url.clone());
  }

  info!("Retrieving SharePoint URL...");

  let root: RootSite = ctx
    .client
    .send_json(ApiRequest::get(ctx.graph("/v1.0/sites/root?$select=webUrl")).accept(ACCEPT_GRAPH_JSON))
    .await?;

  let url = root.web_url.trim_end_matches('/').to_string();
  debug!(url = %url, "discovered SharePoint URL");

  ctx.connection.spo_url = Some(url.clone());
  ctx.persist_connection()?;

  Ok(url)
}

/// Request a form digest for `site_url`.
pub async fn get_request_digest(ctx: &CommandContext, site_url: &str) -> Result<ContextInfo, CommandError> {
  debug!(site = %site_url, "retrieving request digest");

  let info = ctx
    .client
    .send_json(
      ApiRequest::post(format!("{}/_api/contextinfo", site_url.trim_end_matches('/'))).accept(ACCEPT_SPO_JSON),
    )
    .await?;

  Ok(info)
}

#[cfg(test)]
pub(crate) mod testing {
  use mockito::{Mock, ServerGuard};

  /// Mock `/_api/contextinfo` on `server` answering with digest `ABC`.
  pub async fn mock_digest(server: &mut ServerGuard, site_path: &str) -> Mock {
    server
      .mock("POST", format!("{}/_api/contextinfo", site_path).as_str())
      .with_status(200)
      .with_body(r#"{"FormDigestValue":"ABC","FormDigestTimeoutSeconds":1800}"#)
      .create_async()
      .await
  }
}
