//! Request descriptors and URL construction.
//!
//! Every API operation first builds a [`RequestSpec`] through a pure
//! function, then hands it to the transport. This keeps the URL and verb of
//! each operation testable without a network.

use crate::error::ApiError;
use serde_json::Value;
use std::fmt;
use url::Url;

/// HTTP verbs used by the billing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        };
        f.write_str(name)
    }
}

/// A fully-resolved request: verb, URL and optional JSON body.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn get(url: Url) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
        }
    }

    pub fn post(url: Url, body: Option<Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            body,
        }
    }

    pub fn put(url: Url, body: Option<Value>) -> Self {
        Self {
            method: HttpMethod::Put,
            url,
            body,
        }
    }
}

/// Append `parts` as path segments to `origin`. Segments are percent-encoded;
/// a trailing slash on the origin is tolerated.
pub fn build_url(origin: &str, parts: &[&str]) -> Result<Url, ApiError> {
    let mut url =
        Url::parse(origin).map_err(|e| ApiError::InvalidUrl(format!("{origin}: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("cannot-be-a-base url: {origin}")))?;
        segments.pop_if_empty();
        for part in parts {
            segments.push(part);
        }
    }
    Ok(url)
}

/// Like [`build_url`], with query pairs appended in order.
pub fn build_url_with_query(
    origin: &str,
    parts: &[&str],
    pairs: &[(String, String)],
) -> Result<Url, ApiError> {
    let mut url = build_url(origin, parts)?;
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_segments() {
        let url = build_url("https://api.example.test", &["api", "v1", "invoices", "inv_1"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.test/api/v1/invoices/inv_1");
    }

    #[test]
    fn build_url_tolerates_trailing_slash() {
        let url = build_url("https://api.example.test/", &["invoices"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.test/invoices");
    }

    #[test]
    fn build_url_percent_encodes_segments() {
        let url = build_url("https://api.example.test", &["invoices", "inv/1 x"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.test/invoices/inv%2F1%20x");
    }

    #[test]
    fn build_url_rejects_garbage_origin() {
        let err = build_url("not a url", &["invoices"]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn query_pairs_are_appended_in_order() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("per_page".to_string(), "10".to_string()),
        ];
        let url =
            build_url_with_query("https://api.example.test", &["invoices"], &pairs).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.test/invoices?page=2&per_page=10"
        );
    }

    #[test]
    fn empty_query_leaves_url_bare() {
        let url = build_url_with_query("https://api.example.test", &["invoices"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.test/invoices");
    }
}
