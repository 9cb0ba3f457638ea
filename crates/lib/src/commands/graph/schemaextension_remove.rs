//! `graph schemaextension remove`

use tracing::info;

use crate::commands::{CommandError, Outcome};
use crate::context::CommandContext;
use crate::prompt::{Prompt, confirm_action};
use crate::request::{ACCEPT_GRAPH_JSON, ApiRequest};

#[derive(Debug, Clone, Default)]
pub struct SchemaExtensionRemoveOptions {
  /// ID of the schema extension, e.g. `exttyee4dv5_MySchemaExtension`.
  pub id: String,
  /// Skip the confirmation prompt.
  pub confirm: bool,
}

impl SchemaExtensionRemoveOptions {
  pub fn validate(&self) -> Result<(), CommandError> {
    if self.id.trim().is_empty() {
      return Err(CommandError::Validation("Required option id not specified".to_string()));
    }
    Ok(())
  }
}

/// Remove a Microsoft Graph schema extension.
pub async fn remove_schema_extension(
  ctx: &CommandContext,
  options: &SchemaExtensionRemoveOptions,
  prompt: &dyn Prompt,
) -> Result<Outcome, CommandError> {
  let message = format!(
    "Are you sure you want to remove the schema extension with ID {}?",
    options.id
  );
  if !confirm_action(options.confirm, prompt, &message)? {
    return Ok(Outcome::Aborted);
  }

  info!("Removing schema extension with ID {}...", options.id);

  ctx
    .client
    .send(
      ApiRequest::delete(ctx.graph(&format!("/v1.0/schemaExtensions/{}", options.id))).accept(ACCEPT_GRAPH_JSON),
    )
    .await?;

  Ok(Outcome::Completed)
}
