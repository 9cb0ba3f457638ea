//! `spo sitescript set`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::commands::CommandError;
use crate::context::CommandContext;
use crate::request::{ACCEPT_SPO_JSON, ApiRequest, REQUEST_DIGEST_HEADER};
use crate::spo::{get_request_digest, get_spo_url};
use crate::validation::{is_valid_guid, parse_leading_int};

const UPDATE_SITE_SCRIPT_PATH: &str =
  "/_api/Microsoft.Sharepoint.Utilities.WebTemplateExtensions.SiteScriptUtility.UpdateSiteScript";

/// Site script as returned by SharePoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteScript {
  pub id: String,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: Option<String>,
  #[serde(default)]
  pub version: Option<i64>,
  /// Any other property SharePoint returned.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct SiteScriptSetOptions {
  pub id: String,
  pub title: Option<String>,
  pub description: Option<String>,
  pub version: Option<String>,
  /// JSON string containing the site script.
  pub content: Option<String>,
}

impl SiteScriptSetOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if !is_valid_guid(&self.id) {
      return Err(CommandError::Validation(format!("{} is not a valid GUID", self.id)));
    }

    if let Some(version) = non_empty(&self.version) {
      if parse_leading_int(version).is_none() {
        return Err(CommandError::Validation(format!("{} is not a number", version)));
      }
    }

    if let Some(content) = non_empty(&self.content) {
      serde_json::from_str::<Value>(content).map_err(|e| {
        CommandError::Validation(format!(
          "Specified content value is not a valid JSON string. Error: {}",
          e
        ))
      })?;
    }

    Ok(())
  }

  /// `updateInfo` payload with only the provided fields.
  pub fn update_info(&self) -> Value {
    let mut info = Map::new();
    info.insert("Id".to_string(), json!(self.id));

    if let Some(title) = non_empty(&self.title) {
      info.insert("Title".to_string(), json!(title));
    }
    if let Some(description) = non_empty(&self.description) {
      info.insert("Description".to_string(), json!(description));
    }
    if let Some(version) = non_empty(&self.version).and_then(parse_leading_int) {
      info.insert("Version".to_string(), json!(version));
    }
    if let Some(content) = non_empty(&self.content) {
      info.insert("Content".to_string(), json!(content));
    }

    Value::Object(info)
  }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

/// Update an existing site script.
pub async fn set_site_script(
  ctx: &mut CommandContext,
  options: &SiteScriptSetOptions,
) -> Result<SiteScript, CommandError> {
  let spo_url = get_spo_url(ctx).await?;
  let digest = get_request_digest(ctx, &spo_url).await?;

  info!("Updating site script {}...", options.id);

  let script = ctx
    .client
    .send_json(
      ApiRequest::post(format!("{}{}", spo_url, UPDATE_SITE_SCRIPT_PATH))
        .header(REQUEST_DIGEST_HEADER, digest.form_digest_value)
        .header("content-type", "application/json;charset=utf-8")
        .accept(ACCEPT_SPO_JSON)
        .json(json!({ "updateInfo": options.update_info() })),
    )
    .await?;

  Ok(script)
}
