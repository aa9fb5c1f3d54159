//! HTTP transport for the Wishlist service
//!
//! Every call yields either the decoded JSON payload (if any) or a structured
//! [`ApiError`]. There are no retries, no timeouts beyond the browser default
//! and no cancellation.

use async_trait::async_trait;
use contracts::shared::api::ErrorBody;
use gloo_net::http::Request;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Where a request path is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// Under the configured API root (`/api/wishlists/...`)
    Api,
    /// Directly under the service origin (`/health`)
    Service,
}

/// A fully built request, independent of any HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub scope: RequestScope,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            scope: RequestScope::Api,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_scope(mut self, scope: RequestScope) -> Self {
        self.scope = scope;
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Failure of a single HTTP call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the service, if the error body carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn from_error_body(status: u16, text: &str) -> Self {
        ApiError::Server {
            status,
            message: ErrorBody::parse(text).message().map(str::to_string),
        }
    }
}

/// Decode a 2xx body; empty bodies (204, DELETE) carry no payload
pub fn parse_success_body(text: &str) -> Result<Option<Value>, ApiError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Seam between the action controllers and the network
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError>;
}

/// `fetch`-backed transport used in the browser
#[derive(Debug, Clone)]
pub struct GlooTransport {
    api: ApiConfig,
}

impl GlooTransport {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        let url = api_url(&self.api, request.scope, &request.path);

        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        if !ok {
            return Err(ApiError::from_error_body(status, &text));
        }

        parse_success_body(&text)
    }
}
