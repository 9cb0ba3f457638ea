//! Thin request layer over reqwest.
//!
//! Every call goes through [`RequestClient::send`], which attaches the bearer
//! token for the target resource and maps failed responses to
//! [`RequestError`].

mod error;

pub use error::{RequestError, error_message};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::connection::Connection;

/// `accept` header asking SharePoint for JSON without metadata.
pub const ACCEPT_SPO_JSON: &str = "application/json;odata=nometadata";

/// `accept` header asking Graph for JSON without metadata.
pub const ACCEPT_GRAPH_JSON: &str = "application/json;odata.metadata=none";

/// Header carrying the SharePoint form digest.
pub const REQUEST_DIGEST_HEADER: &str = "X-RequestDigest";

const USER_AGENT: &str = concat!("m365-cli/", env!("CARGO_PKG_VERSION"));

/// Request payload.
#[derive(Debug, Clone, Default)]
pub enum Body {
  #[default]
  Empty,
  Json(Value),
  Bytes { content_type: String, data: Vec<u8> },
}

/// A single call against Graph or SharePoint.
#[derive(Debug, Clone)]
pub struct ApiRequest {
  method: Method,
  url: String,
  headers: Vec<(String, String)>,
  body: Body,
}

impl ApiRequest {
  pub fn new(method: Method, url: impl Into<String>) -> Self {
    Self {
      method,
      url: url.into(),
      headers: Vec::new(),
      body: Body::Empty,
    }
  }

  pub fn get(url: impl Into<String>) -> Self {
    Self::new(Method::GET, url)
  }

  pub fn post(url: impl Into<String>) -> Self {
    Self::new(Method::POST, url)
  }

  pub fn put(url: impl Into<String>) -> Self {
    Self::new(Method::PUT, url)
  }

  pub fn delete(url: impl Into<String>) -> Self {
    Self::new(Method::DELETE, url)
  }

  pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
    self.headers.push((name.to_string(), value.into()));
    self
  }

  pub fn accept(self, value: &str) -> Self {
    self.header("accept", value)
  }

  pub fn json(mut self, body: Value) -> Self {
    self.body = Body::Json(body);
    self
  }

  pub fn bytes(mut self, content_type: impl Into<String>, data: Vec<u8>) -> Self {
    self.body = Body::Bytes {
      content_type: content_type.into(),
      data,
    };
    self
  }

  pub fn method(&self) -> &Method {
    &self.method
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn body(&self) -> &Body {
    &self.body
  }

  /// Value of the first header named `name` (case-insensitive).
  pub fn header_value(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(n, _)| n.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }

  fn header_map(&self) -> Result<HeaderMap, RequestError> {
    let mut map = HeaderMap::new();
    for (name, value) in &self.headers {
      let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?;
      let header_value = HeaderValue::from_str(value).map_err(|e| invalid_header(name, e))?;
      map.append(header_name, header_value);
    }
    Ok(map)
  }
}

fn invalid_header(name: &str, e: impl std::fmt::Display) -> RequestError {
  RequestError::InvalidHeader {
    name: name.to_string(),
    message: e.to_string(),
  }
}

/// Successful response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
  pub url: String,
  pub status: StatusCode,
  pub body: String,
}

impl ApiResponse {
  /// Decode the body as `T`.
  pub fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
    serde_json::from_str(&self.body).map_err(|source| RequestError::Decode {
      url: self.url.clone(),
      source,
    })
  }

  /// Decode the body as `T`, treating an empty body or `{"odata.null": true}` as `None`.
  pub fn json_opt<T: DeserializeOwned>(&self) -> Result<Option<T>, RequestError> {
    if self.body.trim().is_empty() {
      return Ok(None);
    }

    let value: Value = self.json()?;
    if value.get("odata.null").and_then(Value::as_bool) == Some(true) {
      return Ok(None);
    }

    serde_json::from_value(value).map(Some).map_err(|source| RequestError::Decode {
      url: self.url.clone(),
      source,
    })
  }
}

/// Authenticated HTTP client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RequestClient {
  http: reqwest::Client,
  connection: Connection,
}

impl RequestClient {
  pub fn new(connection: Connection) -> Result<Self, RequestError> {
    let http = reqwest::Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .map_err(RequestError::Transport)?;
    Ok(Self { http, connection })
  }

  pub fn connection(&self) -> &Connection {
    &self.connection
  }

  /// Execute `request` and return the response if it succeeded.
  pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
    let token = self.connection.token_for(&request.url)?;
    let headers = request.header_map()?;

    debug!(method = %request.method, url = %request.url, "sending request");

    let mut builder = self
      .http
      .request(request.method.clone(), &request.url)
      .bearer_auth(token)
      .headers(headers);

    builder = match request.body {
      Body::Empty => builder,
      Body::Json(value) => builder.json(&value),
      Body::Bytes { content_type, data } => builder.header(CONTENT_TYPE, content_type).body(data),
    };

    let response = builder.send().await.map_err(RequestError::Transport)?;
    let status = response.status();
    let body = response.text().await.map_err(RequestError::Transport)?;

    debug!(status = status.as_u16(), url = %request.url, "response received");

    if !status.is_success() {
      return Err(RequestError::Status {
        status,
        message: error_message(status, &body),
      });
    }

    Ok(ApiResponse {
      url: request.url,
      status,
      body,
    })
  }

  /// Execute `request` and decode the response body as `T`.
  pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, RequestError> {
    self.send(request).await?.json()
  }
}
