//! Core types and wire protocol for the Meterline billing API.
//!
//! Response records, request records, the error type, configuration, and the
//! request/response plumbing shared by the client SDK
//! (`meterline-client`). Nothing here talks to the network; the transport
//! lives in the client crate.
//!
//! # Quick example
//!
//! ```no_run
//! use meterline::{ApiConfig, ListInvoicesParams};
//!
//! let config = ApiConfig::new("your-api-key")
//!     .with_api_url("https://billing.internal.example");
//!
//! let params = ListInvoicesParams {
//!     per_page: Some(20),
//!     ..Default::default()
//! };
//! assert_eq!(params.to_query()[0].0, "per_page");
//! # let _ = config;
//! ```

pub mod config;
pub mod error;
pub mod invoice;
pub mod pagination;
pub mod request;
pub mod resource;
pub mod response;

// Re-exports
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::ApiError;
pub use invoice::*;
pub use pagination::{Page, PaginationMeta};
pub use request::{HttpMethod, RequestSpec};
pub use resource::ApiResource;
