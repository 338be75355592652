use crate::invoices::InvoiceClient;
use meterline::config::API_PATH_SEGMENTS;
use meterline::request::{build_url, build_url_with_query};
use meterline::{ApiConfig, ApiError, HttpMethod, RequestSpec};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// HTTP client for the billing API.
///
/// Wraps `reqwest::Client`. Stateless and cheap to clone; a single instance
/// can be shared across tasks. Every operation goes through a single send
/// path: bearer auth header, one request, one JSON decode.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Http(format!("failed to build http client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Create a client from `METERLINE_API_KEY` / `METERLINE_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Invoice endpoints.
    pub fn invoices(&self) -> InvoiceClient<'_> {
        InvoiceClient::new(self)
    }

    pub(crate) fn url(&self, parts: &[&str]) -> Result<Url, ApiError> {
        let mut all = Vec::with_capacity(API_PATH_SEGMENTS.len() + parts.len());
        all.extend_from_slice(API_PATH_SEGMENTS);
        all.extend_from_slice(parts);
        build_url(&self.config.api_url, &all)
    }

    pub(crate) fn url_with_query(
        &self,
        parts: &[&str],
        pairs: &[(String, String)],
    ) -> Result<Url, ApiError> {
        let mut all = Vec::with_capacity(API_PATH_SEGMENTS.len() + parts.len());
        all.extend_from_slice(API_PATH_SEGMENTS);
        all.extend_from_slice(parts);
        build_url_with_query(&self.config.api_url, &all, pairs)
    }

    /// Send one request and parse the response body. An empty body parses to
    /// `Value::Null`; a non-2xx status becomes [`ApiError::Api`].
    pub(crate) async fn execute(&self, spec: RequestSpec) -> Result<Value, ApiError> {
        let method = match spec.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };
        tracing::debug!(method = %spec.method, url = %spec.url, "sending billing api request");

        let mut request = self
            .http
            .request(method, spec.url.clone())
            .header("Authorization", format!("Bearer {}", self.config.api_key));
        if let Some(body) = &spec.body {
            request = request
                .header("Content-Type", "application/json")
                .json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Http(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %spec.url, "billing api returned an error");
            return Err(api_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Error body shape emitted by the platform on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

fn api_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    };
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Api {
            status: status.as_u16(),
            code: parsed.code,
            message: parsed.error.unwrap_or_else(fallback),
        },
        Err(_) => ApiError::Api {
            status: status.as_u16(),
            code: None,
            message: if body.trim().is_empty() {
                fallback()
            } else {
                body.to_string()
            },
        },
    }
}
