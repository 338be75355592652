//! Envelope plumbing for API response bodies.
//!
//! The platform wraps every payload under a resource-specific key: a single
//! invoice under `invoice`, a collection under `invoices` plus `meta`. These
//! helpers extract and decode those envelopes from an already-parsed body.

use crate::error::ApiError;
use crate::pagination::{Page, PaginationMeta};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The value under `key`, or `None` when the body is not an object, lacks the
/// key, or carries an explicit null.
pub fn envelope<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    match body.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Decode the object under `key`. A missing envelope is a typed error.
pub fn object_response<T: DeserializeOwned>(body: &Value, key: &'static str) -> Result<T, ApiError> {
    let data = envelope(body, key).ok_or(ApiError::MissingKey(key))?;
    Ok(serde_json::from_value(data.clone())?)
}

/// Decode the object under `key`, mapping a missing envelope to `None`.
/// A present envelope that fails to decode is still an error.
pub fn optional_object_response<T: DeserializeOwned>(
    body: &Value,
    key: &str,
) -> Result<Option<T>, ApiError> {
    match envelope(body, key) {
        None => Ok(None),
        Some(data) => Ok(Some(serde_json::from_value(data.clone())?)),
    }
}

/// Decode a collection body: the array under `items_key` plus `meta`.
pub fn collection_response<T: DeserializeOwned>(
    body: &Value,
    items_key: &'static str,
) -> Result<Page<T>, ApiError> {
    let data = envelope(body, items_key).ok_or(ApiError::MissingKey(items_key))?;
    let items: Vec<T> = serde_json::from_value(data.clone())?;
    let meta: PaginationMeta = object_response(body, "meta")?;
    Ok(Page { items, meta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_returns_value_under_key() {
        let body = json!({ "invoice": { "id": "inv_1" } });
        assert_eq!(envelope(&body, "invoice"), Some(&json!({ "id": "inv_1" })));
    }

    #[test]
    fn envelope_is_none_for_missing_null_or_non_object() {
        assert!(envelope(&json!({}), "invoice").is_none());
        assert!(envelope(&json!({ "invoice": null }), "invoice").is_none());
        assert!(envelope(&Value::Null, "invoice").is_none());
        assert!(envelope(&json!([1, 2]), "invoice").is_none());
    }

    #[test]
    fn object_response_decodes_under_key() {
        let body = json!({ "thing": { "name": "a" } });
        let decoded: serde_json::Map<String, Value> = object_response(&body, "thing").unwrap();
        assert_eq!(decoded.get("name"), Some(&json!("a")));
    }

    #[test]
    fn object_response_missing_key_is_typed_error() {
        let body = json!({});
        let err = object_response::<Value>(&body, "invoice").unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("invoice")));
    }

    #[test]
    fn optional_object_response_maps_missing_key_to_none() {
        let decoded: Option<Value> = optional_object_response(&json!({}), "invoice").unwrap();
        assert!(decoded.is_none());
        let decoded: Option<Value> =
            optional_object_response(&Value::Null, "invoice").unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn optional_object_response_surfaces_decode_failures() {
        #[derive(Debug, serde::Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            id: String,
        }
        let body = json!({ "invoice": { "id": 42 } });
        let err = optional_object_response::<Strict>(&body, "invoice").unwrap_err();
        assert!(matches!(err, ApiError::Serde(_)));
    }

    #[test]
    fn collection_response_decodes_items_and_meta() {
        let body = json!({
            "things": [ { "n": 1 }, { "n": 2 } ],
            "meta": {
                "current_page": 1,
                "next_page": 2,
                "total_pages": 3,
                "total_count": 25
            }
        });
        let page: Page<Value> = collection_response(&body, "things").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.next_page, Some(2));
        assert_eq!(page.meta.prev_page, None);
        assert_eq!(page.meta.total_count, 25);
    }

    #[test]
    fn collection_response_requires_meta() {
        let body = json!({ "things": [] });
        let err = collection_response::<Value>(&body, "things").unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("meta")));
    }
}
