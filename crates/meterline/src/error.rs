use thiserror::Error;

/// Errors returned by Meterline API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("api error: status {status}: {message}")]
    Api {
        status: u16,
        /// Machine-readable error code from the platform, when present
        /// (e.g. `invoice_not_found`).
        code: Option<String>,
        message: String,
    },

    #[error("missing `{0}` in response body")]
    MissingKey(&'static str),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}
