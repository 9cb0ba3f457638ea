//! Request failures and OData error extraction.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::connection::ConnectionError;

/// Errors that can occur while calling Graph or SharePoint.
#[derive(Debug, Error)]
pub enum RequestError {
  /// No usable token, or the URL could not be parsed.
  #[error(transparent)]
  Connection(#[from] ConnectionError),

  /// The request never produced a response.
  #[error(transparent)]
  Transport(reqwest::Error),

  /// The service answered with a non-success status.
  ///
  /// `message` is the text extracted by [`error_message`].
  #[error("{message}")]
  Status { status: StatusCode, message: String },

  #[error("invalid header '{name}': {message}")]
  InvalidHeader { name: String, message: String },

  /// The response body did not have the expected shape.
  #[error("failed to decode response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
}

impl RequestError {
  /// HTTP status of the failed response, if the service answered.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      RequestError::Status { status, .. } => Some(*status),
      RequestError::Transport(e) => e.status(),
      _ => None,
    }
  }
}

/// Extract a human readable message from a failed response body.
///
/// SharePoint answers with `{"odata.error": {"message": {"value": ...}}}`,
/// Graph with `{"error": {"message": ...}}`. Any other body is surfaced as is.
pub fn error_message(status: StatusCode, body: &str) -> String {
  let trimmed = body.trim();
  if trimmed.is_empty() {
    return status.to_string();
  }

  let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
    return trimmed.to_string();
  };

  if let Some(value) = json
    .pointer("/odata.error/message/value")
    .and_then(Value::as_str)
  {
    return value.to_string();
  }

  match json.get("error") {
    Some(Value::Object(error)) => {
      if let Some(message) = error.get("message").and_then(Value::as_str) {
        return message.to_string();
      }
    }
    Some(Value::String(message)) => return message.clone(),
    _ => {}
  }

  trimmed.to_string()
}
