//! REST client layer for the task management service.
//!
//! Provides a shared HTTP client that every endpoint module builds on. The
//! client attaches the stored bearer token at call time, unwraps the
//! server's `{data: …}` response envelope, and converts failures into the
//! `ApiError` taxonomy the rest of the application reports from.
//!
//! ## Session invalidation
//!
//! A single global rule applies to every request: an HTTP 401 response
//! clears the persisted session before the error is returned, so the next
//! command starts from a clean logged-out state. No per-request scoping.

use crate::libs::session::Session;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod todos;

pub use auth::AuthApi;
pub use todos::TodoApi;

/// Failure taxonomy for REST calls.
///
/// Local validation never reaches this layer; everything here is either a
/// transport failure or a server-reported status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized,
    #[error("resource not found")]
    NotFound { message: Option<String> },
    #[error("invalid request")]
    BadRequest { message: Option<String> },
    #[error("server error ({status})")]
    Server { status: StatusCode, message: Option<String> },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The server-provided error message, when the response carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message } | ApiError::BadRequest { message } | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Standard success envelope: payloads arrive wrapped as `{"data": …}`.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Error body shape for structured failures: `{"error": "…"}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Shared HTTP client with base URL and bearer authentication.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a request with the bearer token read from storage at call
    /// time, so a re-login mid-process is picked up immediately.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.client.request(method, url);
        match Session::token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Sends a request and applies status handling, including the global
    /// 401 session-invalidation rule.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        match status {
            StatusCode::UNAUTHORIZED => {
                // Token expired or invalid: tear the session down globally.
                let _ = Session::clear();
                Err(ApiError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound { message }),
            StatusCode::BAD_REQUEST => Err(ApiError::BadRequest { message }),
            _ => Err(ApiError::Server { status, message }),
        }
    }

    /// Sends a request and deserializes the `{data}` envelope payload.
    pub async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Convenience for JSON-body requests.
    pub fn json_request<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.request(method, path).json(body)
    }

    /// Extracts a structured error message from a failure response, if any.
    async fn error_message(response: Response) -> Option<String> {
        let body: ErrorBody = response.json().await.ok()?;
        body.error.or(body.message)
    }
}
