//! Execution Client — dispatches a matrix to the remote compute service.
//!
//! DESIGN
//! ======
//! Thin HTTP wrapper over `POST {base}/run_{algorithm}`. The
//! [`AlgorithmExec`] trait is the seam the session depends on; the reqwest
//! client implements it and tests substitute a mock. Response bodies stay
//! untyped (`serde_json::Value`) because their shape depends on the
//! algorithm — the normalizer owns shape interpretation.

use std::time::Duration;

use serde_json::Value;

use crate::algorithm::AlgorithmKind;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the execution request path.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, transport).
    #[error("execution request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status. The message is the
    /// body's `error` field verbatim when present, else a generic status
    /// line.
    #[error("{message}")]
    Response { status: u16, message: String },

    /// A success response body was not valid JSON.
    #[error("execution response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Explicit client configuration, passed in at construction — never a
/// module-global constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ExecConfig {
    /// Build config from environment variables:
    /// - `GRAPHSTEP_BASE_URL` (default `http://127.0.0.1:5000`)
    /// - `GRAPHSTEP_REQUEST_TIMEOUT_SECS` (default 30)
    /// - `GRAPHSTEP_CONNECT_TIMEOUT_SECS` (default 10)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GRAPHSTEP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            request_timeout_secs: env_parse_u64("GRAPHSTEP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("GRAPHSTEP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TRAIT
// =============================================================================

/// Async seam in front of the compute service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AlgorithmExec: Send + Sync {
    /// Run `kind` over `matrix`, starting from `start` where applicable.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecError`] on transport failure, a non-success status,
    /// or an unparseable response body.
    async fn run(
        &self,
        kind: AlgorithmKind,
        matrix: &[Vec<f64>],
        start: Option<usize>,
    ) -> Result<Value, ExecError>;
}

// =============================================================================
// CLIENT
// =============================================================================

/// Reqwest-backed [`AlgorithmExec`] implementation.
pub struct ExecClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExecClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ExecConfig) -> Result<Self, ExecError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ExecError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct RunRequest<'a> {
    matrix: &'a [Vec<f64>],
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
}

#[async_trait::async_trait]
impl AlgorithmExec for ExecClient {
    async fn run(
        &self,
        kind: AlgorithmKind,
        matrix: &[Vec<f64>],
        start: Option<usize>,
    ) -> Result<Value, ExecError> {
        let url = endpoint_url(&self.base_url, kind);
        // MST algorithms ignore the start node; omit it from the body.
        let body = RunRequest { matrix, start: if kind.uses_start() { start } else { None } };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ExecError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ExecError::Response {
                status: status.as_u16(),
                message: error_message(status.as_u16(), status.canonical_reason().unwrap_or("Unknown"), &text),
            });
        }

        serde_json::from_str(&text).map_err(|e| ExecError::Parse(e.to_string()))
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Endpoint for an algorithm run: `{base}/run_{kind}`.
#[must_use]
pub fn endpoint_url(base_url: &str, kind: AlgorithmKind) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), kind.endpoint())
}

/// Failure message for a non-success response: the body's `error` field
/// verbatim when present, otherwise `"Error {status}: {statusText}"`.
#[must_use]
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(ToOwned::to_owned))
        .unwrap_or_else(|| format!("Error {status}: {status_text}"))
}

#[cfg(test)]
#[path = "exec_test.rs"]
mod tests;
