//! `aad o365group add`
//!
//! Creates a unified group, then optionally uploads its logo and adds owners
//! and members. The logo upload is retried because the photo endpoint is not
//! available until the new group has been provisioned.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::commands::CommandError;
use crate::connection::ConnectionError;
use crate::consts::GRAPH_URL;
use crate::context::CommandContext;
use crate::request::{ACCEPT_GRAPH_JSON, ApiRequest};
use crate::retry::{RetryPolicy, retry_async};
use crate::validation::{split_list, validate_upns};

/// Microsoft 365 Group as returned by Graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
  pub id: String,
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub mail: Option<String>,
  #[serde(default)]
  pub mail_nickname: Option<String>,
  #[serde(default)]
  pub visibility: Option<String>,
  #[serde(default)]
  pub group_types: Vec<String>,
  #[serde(default)]
  pub mail_enabled: Option<bool>,
  #[serde(default)]
  pub security_enabled: Option<bool>,
  #[serde(default)]
  pub created_date_time: Option<String>,
  /// Any other property Graph returned.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct O365GroupAddOptions {
  pub display_name: String,
  pub description: String,
  /// Part of the group e-mail before the `@`.
  pub mail_nickname: String,
  /// Comma-separated user principal names.
  pub owners: Option<String>,
  /// Comma-separated user principal names.
  pub members: Option<String>,
  /// `true` or `false`.
  pub is_private: Option<String>,
  pub logo_path: Option<PathBuf>,
}

impl O365GroupAddOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if let Some(owners) = non_empty(&self.owners) {
      validate_upns(owners).map_err(CommandError::Validation)?;
    }

    if let Some(members) = non_empty(&self.members) {
      validate_upns(members).map_err(CommandError::Validation)?;
    }

    if let Some(is_private) = &self.is_private {
      if is_private != "true" && is_private != "false" {
        return Err(CommandError::Validation(format!(
          "{} is not a valid boolean value",
          is_private
        )));
      }
    }

    if let Some(logo_path) = &self.logo_path {
      let full_path = absolute(logo_path);
      if !full_path.exists() {
        return Err(CommandError::Validation(format!(
          "File '{}' not found",
          full_path.display()
        )));
      }
      if full_path.is_dir() {
        return Err(CommandError::Validation(format!(
          "Path '{}' points to a directory",
          full_path.display()
        )));
      }
    }

    Ok(())
  }

  fn visibility(&self) -> &'static str {
    if self.is_private.as_deref() == Some("true") {
      "Private"
    } else {
      "Public"
    }
  }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.trim().is_empty())
}

fn absolute(path: &Path) -> PathBuf {
  std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Content type of a logo file, by extension.
pub fn image_content_type(path: &Path) -> &'static str {
  let extension = path
    .extension()
    .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

  match extension.as_deref() {
    Some("png") => "image/png",
    Some("gif") => "image/gif",
    _ => "image/jpeg",
  }
}

#[derive(Debug, Clone, Copy)]
enum GroupRole {
  Owners,
  Members,
}

impl fmt::Display for GroupRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GroupRole::Owners => f.write_str("owners"),
      GroupRole::Members => f.write_str("members"),
    }
  }
}

#[derive(Debug, Deserialize)]
struct UserId {
  id: String,
}

#[derive(Debug, Deserialize)]
struct UserList {
  #[serde(default)]
  value: Vec<UserId>,
}

/// Create a Microsoft 365 Group.
pub async fn add_group(ctx: &CommandContext, options: &O365GroupAddOptions) -> Result<Group, CommandError> {
  add_group_with_retry(ctx, options, &RetryPolicy::LOGO_UPLOAD).await
}

/// Create a Microsoft 365 Group, retrying the logo upload with `logo_retry`.
pub async fn add_group_with_retry(
  ctx: &CommandContext,
  options: &O365GroupAddOptions,
  logo_retry: &RetryPolicy,
) -> Result<Group, CommandError> {
  info!("Creating Microsoft 365 Group...");

  let group: Group = ctx
    .client
    .send_json(
      ApiRequest::post(ctx.graph("/v1.0/groups"))
        .accept(ACCEPT_GRAPH_JSON)
        .json(json!({
          "description": options.description,
          "displayName": options.display_name,
          "groupTypes": ["Unified"],
          "mailEnabled": true,
          "mailNickname": options.mail_nickname,
          "securityEnabled": false,
          "visibility": options.visibility(),
        })),
    )
    .await?;

  debug!(id = %group.id, "group created");

  match &options.logo_path {
    Some(logo_path) => set_group_logo(ctx, &group.id, logo_path, logo_retry).await?,
    None => debug!("logoPath not set. Skipping"),
  }

  match non_empty(&options.owners) {
    Some(owners) => add_users(ctx, &group.id, owners, GroupRole::Owners).await?,
    None => debug!("Owners not set. Skipping"),
  }

  match non_empty(&options.members) {
    Some(members) => add_users(ctx, &group.id, members, GroupRole::Members).await?,
    None => debug!("Members not set. Skipping"),
  }

  Ok(group)
}

async fn set_group_logo(
  ctx: &CommandContext,
  group_id: &str,
  logo_path: &Path,
  policy: &RetryPolicy,
) -> Result<(), CommandError> {
  let full_path = absolute(logo_path);
  info!("Setting group logo {}...", full_path.display());

  let data = tokio::fs::read(&full_path)
    .await
    .map_err(|source| CommandError::ReadFile {
      path: full_path.clone(),
      source,
    })?;

  let request = ApiRequest::put(ctx.graph(&format!("/v1.0/groups/{}/photo/$value", group_id)))
    .bytes(image_content_type(&full_path), data);
  let client = &ctx.client;

  retry_async(policy, |attempt| {
    let request = request.clone();
    debug!(attempt, "uploading group logo");
    async move { client.send(request).await }
  })
  .await?;

  Ok(())
}

async fn add_users(ctx: &CommandContext, group_id: &str, list: &str, role: GroupRole) -> Result<(), CommandError> {
  let upns = split_list(list);
  info!("Retrieving user information to set group {}...", role);

  let filter = upns
    .iter()
    .map(|upn| format!("userPrincipalName eq '{}'", upn.replace('\'', "''")))
    .collect::<Vec<_>>()
    .join(" or ");

  let users_url = ctx.graph("/v1.0/users");
  let url = Url::parse_with_params(&users_url, &[("$filter", filter.as_str()), ("$select", "id")])
    .map_err(|_| ConnectionError::InvalidUrl(users_url.clone()))?;

  let users: UserList = ctx
    .client
    .send_json(ApiRequest::get(url.as_str()).accept(ACCEPT_GRAPH_JSON))
    .await?;

  if users.value.len() < upns.len() {
    warn!(
      requested = upns.len(),
      found = users.value.len(),
      "some {} were not found and will be skipped",
      role
    );
  }

  let mut join_set = JoinSet::new();

  for user in users.value {
    let client = ctx.client.clone();
    let request = ApiRequest::post(ctx.graph(&format!("/v1.0/groups/{}/{}/$ref", group_id, role)))
      .json(json!({ "@odata.id": format!("{}/v1.0/users/{}", GRAPH_URL, user.id) }));

    join_set.spawn(async move { client.send(request).await });
  }

  while let Some(joined) = join_set.join_next().await {
    joined??;
  }

  Ok(())
}
