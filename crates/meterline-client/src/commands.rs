//! Generic resource commands: find, find-all, create, update.
//!
//! Free functions parameterized over [`ApiResource`], shared by every
//! resource client. Create and update wrap their body under the resource's
//! root envelope key; the decode side unwraps the same key.

use crate::client::ApiClient;
use meterline::response::{collection_response, object_response};
use meterline::{ApiError, ApiResource, Page, RequestSpec};
use serde::Serialize;
use serde_json::Value;

fn wrap_root<T: Serialize>(root: &str, input: &T) -> Result<Value, ApiError> {
    let mut wrapped = serde_json::Map::new();
    wrapped.insert(root.to_string(), serde_json::to_value(input)?);
    Ok(Value::Object(wrapped))
}

fn find_spec<R: ApiResource>(api: &ApiClient, resource_id: &str) -> Result<RequestSpec, ApiError> {
    Ok(RequestSpec::get(api.url(&[R::PATH, resource_id])?))
}

fn find_all_spec<R: ApiResource>(
    api: &ApiClient,
    query: &[(String, String)],
) -> Result<RequestSpec, ApiError> {
    Ok(RequestSpec::get(api.url_with_query(&[R::PATH], query)?))
}

fn create_spec<R: ApiResource>(
    api: &ApiClient,
    input: &impl Serialize,
) -> Result<RequestSpec, ApiError> {
    let url = api.url(&[R::PATH])?;
    Ok(RequestSpec::post(url, Some(wrap_root(R::ROOT, input)?)))
}

fn update_spec<R: ApiResource>(
    api: &ApiClient,
    resource_id: &str,
    input: &impl Serialize,
) -> Result<RequestSpec, ApiError> {
    let url = api.url(&[R::PATH, resource_id])?;
    Ok(RequestSpec::put(url, Some(wrap_root(R::ROOT, input)?)))
}

/// GET `/{PATH}/{id}`, decoded under `ROOT`.
pub async fn find<R: ApiResource>(api: &ApiClient, resource_id: &str) -> Result<R, ApiError> {
    let spec = find_spec::<R>(api, resource_id)?;
    let body = api.execute(spec).await?;
    object_response(&body, R::ROOT)
}

/// GET `/{PATH}?...`, decoded as one collection page.
pub async fn find_all<R: ApiResource>(
    api: &ApiClient,
    query: &[(String, String)],
) -> Result<Page<R>, ApiError> {
    let spec = find_all_spec::<R>(api, query)?;
    let body = api.execute(spec).await?;
    collection_response(&body, R::PATH)
}

/// POST `/{PATH}` with the input wrapped under `ROOT`.
pub async fn create<R: ApiResource>(
    api: &ApiClient,
    input: &impl Serialize,
) -> Result<R, ApiError> {
    let spec = create_spec::<R>(api, input)?;
    let body = api.execute(spec).await?;
    object_response(&body, R::ROOT)
}

/// PUT `/{PATH}/{id}` with the input wrapped under `ROOT`.
pub async fn update<R: ApiResource>(
    api: &ApiClient,
    resource_id: &str,
    input: &impl Serialize,
) -> Result<R, ApiError> {
    let spec = update_spec::<R>(api, resource_id, input)?;
    let body = api.execute(spec).await?;
    object_response(&body, R::ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meterline::{
        ApiConfig, CreateInvoiceInput, HttpMethod, Invoice, InvoiceFeeInput, UpdateInvoiceInput,
    };
    use serde_json::json;

    fn test_api() -> ApiClient {
        ApiClient::new(ApiConfig::new("test-key").with_api_url("https://billing.example.test"))
            .unwrap()
    }

    #[test]
    fn find_builds_get_on_resource_url() {
        let api = test_api();
        let spec = find_spec::<Invoice>(&api, "inv_123").unwrap();
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(
            spec.url.as_str(),
            "https://billing.example.test/api/v1/invoices/inv_123"
        );
        assert!(spec.body.is_none());
    }

    #[test]
    fn find_percent_encodes_resource_ids() {
        let api = test_api();
        let spec = find_spec::<Invoice>(&api, "inv/123").unwrap();
        assert_eq!(
            spec.url.as_str(),
            "https://billing.example.test/api/v1/invoices/inv%2F123"
        );
    }

    #[test]
    fn find_all_builds_get_with_query() {
        let api = test_api();
        let query = vec![
            ("page".to_string(), "2".to_string()),
            ("per_page".to_string(), "10".to_string()),
        ];
        let spec = find_all_spec::<Invoice>(&api, &query).unwrap();
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(
            spec.url.as_str(),
            "https://billing.example.test/api/v1/invoices?page=2&per_page=10"
        );
    }

    #[test]
    fn create_wraps_body_under_root() {
        let api = test_api();
        let input = CreateInvoiceInput {
            external_customer_id: "cust_1".to_string(),
            currency: None,
            fees: vec![InvoiceFeeInput {
                add_on_code: "setup".to_string(),
                unit_amount_cents: Some(1_000),
                units: None,
                description: None,
            }],
        };
        let spec = create_spec::<Invoice>(&api, &input).unwrap();
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(
            spec.url.as_str(),
            "https://billing.example.test/api/v1/invoices"
        );
        assert_eq!(
            spec.body.unwrap(),
            json!({
                "invoice": {
                    "external_customer_id": "cust_1",
                    "fees": [ { "add_on_code": "setup", "unit_amount_cents": 1000 } ]
                }
            })
        );
    }

    #[test]
    fn update_puts_wrapped_body_on_resource_url() {
        let api = test_api();
        let input = UpdateInvoiceInput {
            payment_status: Some(meterline::PaymentStatus::Succeeded),
            metadata: None,
        };
        let spec = update_spec::<Invoice>(&api, "inv_123", &input).unwrap();
        assert_eq!(spec.method, HttpMethod::Put);
        assert_eq!(
            spec.url.as_str(),
            "https://billing.example.test/api/v1/invoices/inv_123"
        );
        assert_eq!(
            spec.body.unwrap(),
            json!({ "invoice": { "payment_status": "succeeded" } })
        );
    }
}
