use crate::error::ApiError;
use std::env;
use std::time::Duration;

/// Default production API origin.
pub const DEFAULT_API_URL: &str = "https://api.meterline.io";

/// Path prefix prepended to every resource path.
pub const API_PATH_SEGMENTS: &[&str] = &["api", "v1"];

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime client configuration. Decouples the client from compile-time
/// constants, enabling self-hosted deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API origin, scheme + host (no path). `DEFAULT_API_URL` unless overridden.
    pub api_url: String,
    /// Secret API key, sent as a bearer token on every request.
    pub api_key: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Configuration for the hosted platform with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point the client at a different deployment (e.g. self-hosted or a
    /// local stub in tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read configuration from `METERLINE_API_KEY` (required) and
    /// `METERLINE_API_URL` (optional).
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = env::var("METERLINE_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::Config("METERLINE_API_KEY is not set".to_string()))?;

        let api_url = env::var("METERLINE_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url,
            api_key,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }
}
