//! Types shared across the service clients.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::Config;

/// Standard User-Agent header for ReadApt API requests.
pub const USER_AGENT: &str = concat!("readapt/", env!("CARGO_PKG_VERSION"));

/// Default base URL for a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Resolves the services base URL with precedence: env > config > default.
///
/// # Errors
/// Returns an error if a candidate URL is not well-formed.
pub fn resolve_base_url(config_base_url: Option<&str>) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var("READAPT_BASE_URL") {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    Ok(DEFAULT_BASE_URL.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid services base URL: {url}"))?;
    Ok(())
}

/// Resolved connection settings shared by every client.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Per-request timeout; None disables it.
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Builds service settings from the application config.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = resolve_base_url(config.services.effective_base_url())?;
        Ok(Self {
            base_url,
            timeout: config.service_timeout(),
        })
    }

    /// Applies the configured timeout to a request builder.
    pub(crate) fn apply_timeout(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}

/// Categories of service errors for consistent degradation handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection failure or request timeout
    Timeout,
    /// Failed to parse the response body
    Parse,
    /// Application-level failure reported by the service
    Api,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::HttpStatus => write!(f, "http_status"),
            ServiceErrorKind::Timeout => write!(f, "timeout"),
            ServiceErrorKind::Parse => write!(f, "parse"),
            ServiceErrorKind::Api => write!(f, "api_error"),
        }
    }
}

/// Structured error from a service with kind and details.
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// Error category
    pub kind: ServiceErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, extracting a cleaner message from a
    /// JSON error body when one is present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}");
        let details = if body.is_empty() {
            None
        } else {
            if let Ok(json) = serde_json::from_str::<Value>(body)
                && let Some(msg) = json
                    .get("detail")
                    .and_then(Value::as_str)
                    .or_else(|| json.get("error").and_then(Value::as_str))
            {
                return Self {
                    kind: ServiceErrorKind::HttpStatus,
                    message: format!("HTTP {status}: {msg}"),
                    details: Some(body.to_string()),
                };
            }
            Some(body.to_string())
        };
        Self {
            kind: ServiceErrorKind::HttpStatus,
            message,
            details,
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Parse, message)
    }

    /// Creates an application-level error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Api, message)
    }

    /// Maps a transport error from the HTTP client.
    pub fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::new(ServiceErrorKind::Timeout, format!("request failed: {err}"))
        } else if err.is_decode() {
            Self::parse(format!("invalid response body: {err}"))
        } else {
            Self::api(format!("request failed: {err}"))
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Result type for service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Sends a JSON POST and decodes a JSON response, mapping every failure
/// into a [`ServiceError`].
pub(crate) async fn post_json<Req, Resp>(
    http: &reqwest::Client,
    config: &ServiceConfig,
    path: &str,
    request: &Req,
) -> ServiceResult<Resp>
where
    Req: serde::Serialize,
    Resp: serde::de::DeserializeOwned,
{
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), path);
    tracing::debug!(%url, "service request");

    let builder = http
        .post(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .json(request);
    let response = config
        .apply_timeout(builder)
        .send()
        .await
        .map_err(|e| ServiceError::transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::http_status(status.as_u16(), &body));
    }

    response
        .json::<Resp>()
        .await
        .map_err(|e| ServiceError::parse(format!("invalid response from {path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Env var wins over config, config over default.
    ///
    /// Runs as a single test because the environment is process-global.
    #[test]
    fn test_resolve_base_url_precedence() {
        // SAFETY: tests in this module are the only writers of this var.
        unsafe { std::env::remove_var("READAPT_BASE_URL") };

        assert_eq!(resolve_base_url(None).unwrap(), DEFAULT_BASE_URL);
        assert_eq!(
            resolve_base_url(Some("http://cfg.example.com/api")).unwrap(),
            "http://cfg.example.com/api"
        );

        unsafe { std::env::set_var("READAPT_BASE_URL", "http://env.example.com/api") };
        assert_eq!(
            resolve_base_url(Some("http://cfg.example.com/api")).unwrap(),
            "http://env.example.com/api"
        );
        unsafe { std::env::remove_var("READAPT_BASE_URL") };
    }

    /// Malformed URLs are rejected at resolution time.
    #[test]
    fn test_resolve_base_url_validates() {
        assert!(resolve_base_url(Some("not a url")).is_err());
    }

    /// FastAPI-style `detail` bodies produce a clean message.
    #[test]
    fn test_http_status_extracts_detail() {
        let err = ServiceError::http_status(503, r#"{"detail": "model not loaded"}"#);
        assert_eq!(err.kind, ServiceErrorKind::HttpStatus);
        assert_eq!(err.message, "HTTP 503: model not loaded");
        assert!(err.details.is_some());
    }

    /// Non-JSON bodies are kept as details.
    #[test]
    fn test_http_status_plain_body() {
        let err = ServiceError::http_status(500, "upstream blew up");
        assert_eq!(err.message, "HTTP 500");
        assert_eq!(err.details.as_deref(), Some("upstream blew up"));
    }
}
